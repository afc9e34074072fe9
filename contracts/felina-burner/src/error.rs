use thiserror::Error;

use cosmwasm_std::{OverflowError, StdError};
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

    #[error("Upkeep not needed (interval elapsed: {has_elapsed}, target supply reached: {floor_reached})")]
    UpkeepNotNeeded {
        has_elapsed: bool,
        floor_reached: bool,
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
