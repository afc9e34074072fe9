use thiserror::Error;

use cosmwasm_std::{OverflowError, StdError, Uint128};
use felina::OwnershipError;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Caller is not the owner")]
    Unauthorized,

    #[error("Target supply {target_supply} exceeds initial supply {initial_supply}")]
    TargetAboveInitialSupply {
        target_supply: Uint128,
        initial_supply: Uint128,
    },

    #[error("Insufficient balance: {required} required but only {available} available")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Value {requested} exceeds allowance {allowance}")]
    AllowanceExceeded {
        requested: Uint128,
        allowance: Uint128,
    },

    #[error("Cannot decrease allowance {allowance} by {requested}")]
    AllowanceUnderflow {
        allowance: Uint128,
        requested: Uint128,
    },

    #[error("Burning {amount} would decrease the supply of {total_supply} below the target supply {target_supply}")]
    SupplyBelowTarget {
        total_supply: Uint128,
        amount: Uint128,
        target_supply: Uint128,
    },
}

impl From<OwnershipError> for ContractError {
    fn from(err: OwnershipError) -> Self {
        match err {
            OwnershipError::Std(err) => ContractError::Std(err),
            OwnershipError::Unauthorized => ContractError::Unauthorized,
        }
    }
}
