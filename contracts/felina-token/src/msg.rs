use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::TokenInfo;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Supply minted to the instantiating account, in whole tokens
    pub initial_supply: Uint128,
    /// The supply burns can never go below, in whole tokens.
    /// Must not exceed `initial_supply`.
    pub target_supply: Uint128,
    /// Paid to the block producer on every transfer, in whole tokens.
    /// Use 0 to disable.
    pub block_reward: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Moves `amount` from the sender to `recipient`. The sender additionally pays the block reward.
    Transfer { recipient: String, amount: Uint128 },
    /// Moves `amount` from `owner` to `recipient` using the allowance `owner` granted to the sender.
    /// `owner` pays the block reward.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Sets the allowance of `spender` over the sender's tokens, replacing the previous one
    Approve { spender: String, amount: Uint128 },
    IncreaseAllowance { spender: String, amount: Uint128 },
    DecreaseAllowance { spender: String, amount: Uint128 },
    /// Destroys `amount` of the sender's tokens
    Burn { amount: Uint128 },
    /// Destroys `amount` of `owner`'s tokens using the allowance `owner` granted to the sender
    BurnFrom { owner: String, amount: Uint128 },
    /// Sets the block reward in the smallest unit, the unit [`QueryMsg::BlockReward`] reports.
    /// Only the owner can do this.
    SetBlockReward { amount: Uint128 },
    /// Hands the administration over to `new_owner`. Only the owner can do this.
    TransferOwnership { new_owner: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Name, symbol, decimals and supply figures
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(BlockRewardResponse)]
    BlockReward {},
    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct MigrateMsg {}

pub type TokenInfoResponse = TokenInfo;

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct BlockRewardResponse {
    /// In the smallest unit
    pub block_reward: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}
