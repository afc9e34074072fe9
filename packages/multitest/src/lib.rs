// Testing utils. See tests folder for actual tests.

use anyhow::{bail, Result as AnyResult};
use cosmwasm_std::testing::{MockApi, MockStorage};
use cosmwasm_std::{
    to_json_binary, Addr, Api, Attribute, Binary, BlockInfo, CustomMsg, CustomQuery, Empty,
    Querier, Storage, Uint128,
};
use cw_multi_test::{
    App, AppResponse, BankKeeper, BasicAppBuilder, ContractWrapper, CosmosRouter, Executor,
    Module, WasmKeeper,
};
use felina::{BlockProducerResponse, FelinaQuery};
use serde::de::DeserializeOwned;

/// One whole token in the smallest unit
pub const TOKEN: u128 = 1_000_000_000_000_000_000;

/// A chain that answers [`FelinaQuery`]
pub type FelinaApp =
    App<BankKeeper, MockApi, MockStorage, BlockProducers, WasmKeeper<Empty, FelinaQuery>>;

/// Chain module producing blocks in turns: block `h` is produced by `producers[h % len]`
pub struct BlockProducers {
    producers: Vec<Addr>,
}

impl BlockProducers {
    pub fn new(producers: Vec<Addr>) -> Self {
        Self { producers }
    }
}

impl Module for BlockProducers {
    type ExecT = Empty;
    type QueryT = FelinaQuery;
    type SudoT = Empty;

    fn execute<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        _storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        _sender: Addr,
        _msg: Self::ExecT,
    ) -> AnyResult<AppResponse>
    where
        ExecC: CustomMsg + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        bail!("Block producers do not accept messages")
    }

    fn query(
        &self,
        _api: &dyn Api,
        _storage: &dyn Storage,
        _querier: &dyn Querier,
        block: &BlockInfo,
        request: Self::QueryT,
    ) -> AnyResult<Binary> {
        match request {
            FelinaQuery::BlockProducer {} => {
                if self.producers.is_empty() {
                    bail!("No block producers configured");
                }
                let index = (block.height % self.producers.len() as u64) as usize;
                let response = BlockProducerResponse {
                    address: self.producers[index].clone(),
                };
                Ok(to_json_binary(&response)?)
            }
        }
    }

    fn sudo<ExecC, QueryC>(
        &self,
        _api: &dyn Api,
        _storage: &mut dyn Storage,
        _router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        _block: &BlockInfo,
        _msg: Self::SudoT,
    ) -> AnyResult<AppResponse>
    where
        ExecC: CustomMsg + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        bail!("Block producers do not accept sudo messages")
    }
}

/// Creates a chain on which `producers` take turns producing blocks
pub fn felina_app(producers: &[&str]) -> FelinaApp {
    let api = MockApi::default();
    let producers = producers.iter().map(|name| api.addr_make(name)).collect();
    BasicAppBuilder::<Empty, FelinaQuery>::new_custom()
        .with_custom(BlockProducers::new(producers))
        .build(|_router, _api, _storage| {})
}

/// Converts whole tokens into the smallest unit
pub fn tokens(amount: u128) -> Uint128 {
    Uint128::new(amount * TOKEN)
}

/// Moves the chain `seconds` into the future and produces the next block
pub fn advance_time(app: &mut FelinaApp, seconds: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(seconds);
        block.height += 1;
    });
}

pub fn instantiate_token(
    app: &mut FelinaApp,
    owner: &Addr,
    msg: &felina_token::msg::InstantiateMsg,
) -> Addr {
    let code = ContractWrapper::new(
        felina_token::contract::execute,
        felina_token::contract::instantiate,
        felina_token::contract::query,
    )
    .with_migrate(felina_token::contract::migrate);
    let code_id = app.store_code(Box::new(code));
    app.instantiate_contract(code_id, owner.clone(), msg, &[], "Felina", None)
        .unwrap()
}

pub fn instantiate_burner(
    app: &mut FelinaApp,
    owner: &Addr,
    msg: &felina_burner::msg::InstantiateMsg,
) -> Addr {
    let code = ContractWrapper::new_with_empty(
        felina_burner::contract::execute,
        felina_burner::contract::instantiate,
        felina_burner::contract::query,
    );
    let code_id = app.store_code(Box::new(code));
    app.instantiate_contract(code_id, owner.clone(), msg, &[], "Felina burner", None)
        .unwrap()
}

pub fn query_balance(app: &FelinaApp, token: &Addr, address: &Addr) -> Uint128 {
    let response: felina_token::msg::BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            token,
            &felina_token::msg::QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    response.balance
}

pub fn query_token_info(app: &FelinaApp, token: &Addr) -> felina_token::msg::TokenInfoResponse {
    app.wrap()
        .query_wasm_smart(token, &felina_token::msg::QueryMsg::TokenInfo {})
        .unwrap()
}

/// Gets the value of the first attribute with the given key
pub fn first_attr(data: impl AsRef<[Attribute]>, search_key: &str) -> Option<String> {
    data.as_ref().iter().find_map(|a| {
        if a.key == search_key {
            Some(a.value.clone())
        } else {
            None
        }
    })
}
