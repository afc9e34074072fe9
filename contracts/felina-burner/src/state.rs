use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::Item;
use felina::Ownership;

#[cw_serde]
pub struct Config {
    /// The Felina token contract. Immutable.
    pub token: Addr,
    /// Amount burnt per upkeep, in the smallest unit
    pub daily_burn_amount: Uint128,
    /// Minimum number of seconds between two upkeeps
    pub burning_interval: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

#[cw_serde]
pub struct Schedule {
    /// Block time of the last successful upkeep. Instantiation time before the first one.
    pub last_timestamp: Timestamp,
    /// Sum of all amounts burnt through this contract
    pub total_burnt: Uint128,
}

pub const SCHEDULE: Item<Schedule> = Item::new("schedule");

/// The owner grants this contract the allowance it burns from
pub const OWNERSHIP: Ownership = Ownership::new("owner");
