use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use felina::Ownership;

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Sum of all balances. Only burns change it after instantiation.
    pub total_supply: Uint128,
    /// Lower bound of `total_supply`
    pub target_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// In the smallest unit
pub const BLOCK_REWARD: Item<Uint128> = Item::new("block_reward");

pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// A map from (owner, spender) to the amount spender may still move or burn
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

pub const OWNERSHIP: Ownership = Ownership::new("owner");

pub fn balance_of(storage: &dyn Storage, address: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, address)?.unwrap_or_default())
}

pub fn allowance_of(storage: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}
