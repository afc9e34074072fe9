pub mod attributes;
pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
mod upkeep;

pub use crate::error::ContractError;
pub use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
