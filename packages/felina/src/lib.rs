//! Shared building blocks of the Felina contracts: the chain bindings that expose the
//! current block producer, the owner guard and the token unit conversion.

mod bindings;
mod ownership;
mod units;

pub use bindings::{query_block_producer, BlockProducerResponse, FelinaQuery};
pub use ownership::{Ownership, OwnershipError};
pub use units::{whole_tokens, DECIMALS};
