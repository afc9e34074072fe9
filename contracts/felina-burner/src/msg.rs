use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::Schedule;

#[cw_serde]
pub struct InstantiateMsg {
    /// Amount burnt per upkeep, in whole tokens
    pub daily_burn_amount: Uint128,
    /// Minimum number of seconds between two upkeeps
    pub burning_interval: u64,
    /// Address of the Felina token contract
    pub token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Burns `daily_burn_amount` from the owner's allowance if the upkeep is needed.
    /// Anyone can call this.
    PerformUpkeep {},
    /// Sets the amount burnt per upkeep, in whole tokens. Only the owner can do this.
    SetBurningAmount { amount: Uint128 },
    /// Sets the minimum number of seconds between two upkeeps. Only the owner can do this.
    SetBurningInterval { interval: u64 },
    /// Hands the contract over to `new_owner`. Only the owner can do this.
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get the config state
    #[returns(ConfigResponse)]
    Config {},
    /// Last upkeep and total burnt
    #[returns(ScheduleResponse)]
    Schedule {},
    /// Tells keepers whether [`ExecuteMsg::PerformUpkeep`] would succeed now
    #[returns(UpkeepResponse)]
    CheckUpkeep {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub token: Addr,
    /// In the smallest unit
    pub daily_burn_amount: Uint128,
    /// In seconds
    pub burning_interval: u64,
}

pub type ScheduleResponse = Schedule;

#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    /// At least `burning_interval` seconds passed since the last upkeep
    pub has_elapsed: bool,
    /// The token supply is at or below its target supply
    pub floor_reached: bool,
}
