// Testing felina-burner and felina-token interaction

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::Executor;
use felina_burner::msg::{ScheduleResponse, UpkeepResponse};
use felina_multitest::{
    advance_time, felina_app, first_attr, instantiate_burner, instantiate_token, query_balance,
    query_token_info, tokens, FelinaApp,
};
use felina_token::attributes::{ATTR_ACTION, ATTR_AMOUNT};
use felina_token::msg::AllowanceResponse;

const DAY: u64 = 86_400;

struct Setup {
    app: FelinaApp,
    owner: Addr,
    keeper: Addr,
    token: Addr,
    burner: Addr,
}

/// Token of `initial_supply` whole tokens and a burner of 137,000 tokens per day
fn setup(initial_supply: u128, target_supply: u128) -> Setup {
    let mut app = felina_app(&["validator"]);
    let owner = app.api().addr_make("owner");
    let keeper = app.api().addr_make("keeper");

    let token = instantiate_token(
        &mut app,
        &owner,
        &felina_token::msg::InstantiateMsg {
            name: "Felina".to_string(),
            symbol: "FEL".to_string(),
            initial_supply: Uint128::new(initial_supply),
            target_supply: Uint128::new(target_supply),
            block_reward: Uint128::new(5),
        },
    );
    let burner = instantiate_burner(
        &mut app,
        &owner,
        &felina_burner::msg::InstantiateMsg {
            daily_burn_amount: Uint128::new(137_000),
            burning_interval: DAY,
            token: token.to_string(),
        },
    );

    Setup {
        app,
        owner,
        keeper,
        token,
        burner,
    }
}

impl Setup {
    fn approve_burner(&mut self, amount: Uint128) {
        self.app
            .execute_contract(
                self.owner.clone(),
                self.token.clone(),
                &felina_token::msg::ExecuteMsg::Approve {
                    spender: self.burner.to_string(),
                    amount,
                },
                &[],
            )
            .unwrap();
    }

    fn perform_upkeep(&mut self) -> anyhow::Result<cw_multi_test::AppResponse> {
        self.app.execute_contract(
            self.keeper.clone(),
            self.burner.clone(),
            &felina_burner::msg::ExecuteMsg::PerformUpkeep {},
            &[],
        )
    }

    fn check_upkeep(&self) -> UpkeepResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.burner,
                &felina_burner::msg::QueryMsg::CheckUpkeep {},
            )
            .unwrap()
    }

    fn schedule(&self) -> ScheduleResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.burner, &felina_burner::msg::QueryMsg::Schedule {})
            .unwrap()
    }

    fn allowance(&self) -> Uint128 {
        let response: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.token,
                &felina_token::msg::QueryMsg::Allowance {
                    owner: self.owner.to_string(),
                    spender: self.burner.to_string(),
                },
            )
            .unwrap();
        response.allowance
    }
}

#[test]
fn daily_burn_cycle_works() {
    let mut s = setup(1_000_000_000, 500_000_000);
    s.approve_burner(tokens(500_000));

    assert!(!s.check_upkeep().upkeep_needed);
    let err = s.perform_upkeep().unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        felina_burner::ContractError::UpkeepNotNeeded {
            has_elapsed: false,
            floor_reached: false,
        }
        .to_string()
    );

    advance_time(&mut s.app, DAY + 1);
    assert_eq!(
        s.check_upkeep(),
        UpkeepResponse {
            upkeep_needed: true,
            has_elapsed: true,
            floor_reached: false,
        }
    );

    let res = s.perform_upkeep().unwrap();
    let token_event = res
        .events
        .iter()
        .find(|ev| {
            ev.ty == "wasm" && first_attr(&ev.attributes, ATTR_ACTION).as_deref() == Some("burn")
        })
        .unwrap();
    assert_eq!(
        first_attr(&token_event.attributes, ATTR_AMOUNT).unwrap(),
        tokens(137_000).to_string()
    );

    assert_eq!(
        query_token_info(&s.app, &s.token).total_supply,
        tokens(1_000_000_000 - 137_000)
    );
    assert_eq!(
        query_balance(&s.app, &s.token, &s.owner),
        tokens(1_000_000_000 - 137_000)
    );
    assert_eq!(s.allowance(), tokens(500_000 - 137_000));
    assert_eq!(
        s.schedule(),
        ScheduleResponse {
            last_timestamp: s.app.block_info().time,
            total_burnt: tokens(137_000),
        }
    );

    // Keepers calling twice in the same window get rejected
    assert!(!s.check_upkeep().upkeep_needed);
    s.perform_upkeep().unwrap_err();

    advance_time(&mut s.app, DAY);
    s.perform_upkeep().unwrap();
    assert_eq!(s.schedule().total_burnt, tokens(2 * 137_000));
    assert_eq!(s.allowance(), tokens(500_000 - 2 * 137_000));
}

#[test]
fn failed_burn_reverts_upkeep() {
    let mut s = setup(1_000_000_000, 500_000_000);
    s.approve_burner(tokens(1_000));
    let schedule_before = s.schedule();

    advance_time(&mut s.app, DAY + 1);
    assert!(s.check_upkeep().upkeep_needed);

    let err = s.perform_upkeep().unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        felina_token::ContractError::AllowanceExceeded {
            requested: tokens(137_000),
            allowance: tokens(1_000),
        }
        .to_string()
    );

    // Nothing was burnt and the schedule did not move
    assert_eq!(s.schedule(), schedule_before);
    assert_eq!(
        query_token_info(&s.app, &s.token).total_supply,
        tokens(1_000_000_000)
    );
    assert_eq!(s.allowance(), tokens(1_000));
    assert!(s.check_upkeep().upkeep_needed);

    // Once the allowance is raised the pending upkeep goes through
    s.approve_burner(tokens(137_000));
    s.perform_upkeep().unwrap();
    assert_eq!(s.schedule().total_burnt, tokens(137_000));
}

#[test]
fn burning_stops_at_target_supply() {
    let mut s = setup(1_000_000, 800_000);
    s.approve_burner(tokens(1_000_000));

    advance_time(&mut s.app, DAY);
    s.perform_upkeep().unwrap();
    assert_eq!(
        query_token_info(&s.app, &s.token).total_supply,
        tokens(863_000)
    );

    // The daily amount would overshoot the target, so the token refuses the burn
    advance_time(&mut s.app, DAY);
    assert!(s.check_upkeep().upkeep_needed);
    let err = s.perform_upkeep().unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        felina_token::ContractError::SupplyBelowTarget {
            total_supply: tokens(863_000),
            amount: tokens(137_000),
            target_supply: tokens(800_000),
        }
        .to_string()
    );

    // Burning exactly the rest lands on the target
    s.app
        .execute_contract(
            s.owner.clone(),
            s.burner.clone(),
            &felina_burner::msg::ExecuteMsg::SetBurningAmount {
                amount: Uint128::new(63_000),
            },
            &[],
        )
        .unwrap();
    s.perform_upkeep().unwrap();
    assert_eq!(
        query_token_info(&s.app, &s.token).total_supply,
        tokens(800_000)
    );
    assert_eq!(s.schedule().total_burnt, tokens(200_000));

    advance_time(&mut s.app, DAY);
    assert_eq!(
        s.check_upkeep(),
        UpkeepResponse {
            upkeep_needed: false,
            has_elapsed: true,
            floor_reached: true,
        }
    );
    let err = s.perform_upkeep().unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        felina_burner::ContractError::UpkeepNotNeeded {
            has_elapsed: true,
            floor_reached: true,
        }
        .to_string()
    );
}

#[test]
fn only_owner_configures_burner() {
    let mut s = setup(1_000_000_000, 500_000_000);
    let err = s
        .app
        .execute_contract(
            s.keeper.clone(),
            s.burner.clone(),
            &felina_burner::msg::ExecuteMsg::SetBurningInterval { interval: 1 },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        felina_burner::ContractError::Unauthorized.to_string()
    );

    s.app
        .execute_contract(
            s.owner.clone(),
            s.burner.clone(),
            &felina_burner::msg::ExecuteMsg::SetBurningInterval { interval: 60 },
            &[],
        )
        .unwrap();
    s.approve_burner(tokens(137_000));
    advance_time(&mut s.app, 60);
    s.perform_upkeep().unwrap();
}

#[test]
fn zero_burning_amount_performs_empty_upkeeps() {
    let mut s = setup(1_000_000_000, 500_000_000);
    s.approve_burner(tokens(500_000));
    s.app
        .execute_contract(
            s.owner.clone(),
            s.burner.clone(),
            &felina_burner::msg::ExecuteMsg::SetBurningAmount {
                amount: Uint128::zero(),
            },
            &[],
        )
        .unwrap();

    advance_time(&mut s.app, DAY);
    s.perform_upkeep().unwrap();

    assert_eq!(
        s.schedule(),
        ScheduleResponse {
            last_timestamp: s.app.block_info().time,
            total_burnt: Uint128::zero(),
        }
    );
    assert_eq!(
        query_token_info(&s.app, &s.token).total_supply,
        tokens(1_000_000_000)
    );
    assert_eq!(
        query_balance(&s.app, &s.token, &s.owner),
        tokens(1_000_000_000)
    );
    assert_eq!(s.allowance(), tokens(500_000));

    // The next cycle starts from the empty upkeep
    assert!(!s.check_upkeep().upkeep_needed);
    advance_time(&mut s.app, DAY);
    assert!(s.check_upkeep().upkeep_needed);
}
