#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Addr, Deps, DepsMut, Env, MessageInfo, QuerierWrapper,
    QueryResponse, Response, StdResult, Uint128, WasmMsg,
};
use felina::whole_tokens;
use felina_token::msg::{
    ExecuteMsg as TokenExecuteMsg, QueryMsg as TokenQueryMsg, TokenInfoResponse,
};

use crate::attributes::{
    ATTR_ACTION, ATTR_BURNING_INTERVAL, ATTR_DAILY_BURN_AMOUNT, ATTR_LAST_TIMESTAMP, ATTR_OWNER,
    ATTR_PREVIOUS_OWNER, ATTR_TOKEN, ATTR_TOTAL_BURNT,
};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, ScheduleResponse,
    UpkeepResponse,
};
use crate::state::{Config, Schedule, CONFIG, OWNERSHIP, SCHEDULE};
use crate::upkeep;

const CONTRACT_NAME: &str = "crates.io:felina-burner";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&msg.token)?;
    // Also makes sure the address belongs to a Felina token
    let daily_burn_amount = to_token_units(&deps.querier, &token, msg.daily_burn_amount)?;

    let config = Config {
        token,
        daily_burn_amount,
        burning_interval: msg.burning_interval,
    };
    let schedule = Schedule {
        last_timestamp: env.block.time,
        total_burnt: Uint128::zero(),
    };

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(deps.storage, &config)?;
    SCHEDULE.save(deps.storage, &schedule)?;
    OWNERSHIP.initialize(deps.storage, &info.sender)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "instantiate")
        .add_attribute(ATTR_OWNER, info.sender)
        .add_attribute(ATTR_TOKEN, config.token)
        .add_attribute(ATTR_DAILY_BURN_AMOUNT, config.daily_burn_amount)
        .add_attribute(
            ATTR_BURNING_INTERVAL,
            config.burning_interval.to_string(),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PerformUpkeep {} => execute_perform_upkeep(deps, env),
        ExecuteMsg::SetBurningAmount { amount } => execute_set_burning_amount(deps, info, amount),
        ExecuteMsg::SetBurningInterval { interval } => {
            execute_set_burning_interval(deps, info, interval)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::Schedule {} => to_json_binary(&query_schedule(deps)?)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
    };
    Ok(response)
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let Config {
        token,
        daily_burn_amount,
        burning_interval,
    } = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: OWNERSHIP.owner(deps.storage)?,
        token,
        daily_burn_amount,
        burning_interval,
    })
}

fn query_schedule(deps: Deps) -> StdResult<ScheduleResponse> {
    SCHEDULE.load(deps.storage)
}

/// Read-only. Keepers poll this before sending [`ExecuteMsg::PerformUpkeep`].
fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<UpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let schedule = SCHEDULE.load(deps.storage)?;
    upkeep::evaluate(&deps.querier, env.block.time, &config, &schedule)
}

/// Burns the daily amount from the owner's tokens.
///
/// The predicate of the `CheckUpkeep` query is evaluated again here against fresh state, so
/// a stale or duplicate keeper call fails instead of burning twice. The burn is dispatched
/// within this transaction: if the token rejects it, the schedule update is reverted as well.
fn execute_perform_upkeep(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut schedule = SCHEDULE.load(deps.storage)?;

    let UpkeepResponse {
        upkeep_needed,
        has_elapsed,
        floor_reached,
    } = upkeep::evaluate(&deps.querier, env.block.time, &config, &schedule)?;
    ensure!(
        upkeep_needed,
        ContractError::UpkeepNotNeeded {
            has_elapsed,
            floor_reached,
        }
    );

    let owner = OWNERSHIP.owner(deps.storage)?;
    schedule.last_timestamp = env.block.time;
    schedule.total_burnt = schedule.total_burnt.checked_add(config.daily_burn_amount)?;
    SCHEDULE.save(deps.storage, &schedule)?;

    let burn = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount: config.daily_burn_amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn)
        .add_attribute(ATTR_ACTION, "perform_upkeep")
        .add_attribute(ATTR_OWNER, owner)
        .add_attribute(ATTR_DAILY_BURN_AMOUNT, config.daily_burn_amount)
        .add_attribute(ATTR_TOTAL_BURNT, schedule.total_burnt)
        .add_attribute(ATTR_LAST_TIMESTAMP, schedule.last_timestamp.to_string()))
}

fn execute_set_burning_amount(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let querier = &deps.querier;
    let daily_burn_amount = OWNERSHIP.guard(deps.storage, &info.sender, |storage| {
        let mut config = CONFIG.load(storage)?;
        config.daily_burn_amount = to_token_units(querier, &config.token, amount)?;
        CONFIG.save(storage, &config)?;
        Ok::<_, ContractError>(config.daily_burn_amount)
    })?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_burning_amount")
        .add_attribute(ATTR_DAILY_BURN_AMOUNT, daily_burn_amount))
}

fn execute_set_burning_interval(
    deps: DepsMut,
    info: MessageInfo,
    interval: u64,
) -> Result<Response, ContractError> {
    OWNERSHIP.guard(deps.storage, &info.sender, |storage| {
        CONFIG.update(storage, |mut config| -> Result<_, ContractError> {
            config.burning_interval = interval;
            Ok(config)
        })
    })?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "set_burning_interval")
        .add_attribute(ATTR_BURNING_INTERVAL, interval.to_string()))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = deps.api.addr_validate(&new_owner)?;
    let previous_owner = OWNERSHIP.transfer(deps.storage, &info.sender, &new_owner)?;

    Ok(Response::new()
        .add_attribute(ATTR_ACTION, "transfer_ownership")
        .add_attribute(ATTR_PREVIOUS_OWNER, previous_owner)
        .add_attribute(ATTR_OWNER, new_owner))
}

/// Converts whole tokens to the smallest unit using the decimals of `token`
fn to_token_units(
    querier: &QuerierWrapper,
    token: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let token_info: TokenInfoResponse =
        querier.query_wasm_smart(token, &TokenQueryMsg::TokenInfo {})?;
    Ok(whole_tokens(amount, token_info.decimals)?)
}
