//! Stable attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients
//! (explorers, indexers) rely on them.

pub const ATTR_ACTION: &str = "action";

/// Sender of a transfer
pub const ATTR_FROM: &str = "from";

/// Recipient of a transfer
pub const ATTR_TO: &str = "to";

/// Transferred or burnt amount in the smallest unit
pub const ATTR_AMOUNT: &str = "amount";

pub const ATTR_OWNER: &str = "owner";

pub const ATTR_SPENDER: &str = "spender";

/// The allowance after an approval change
pub const ATTR_ALLOWANCE: &str = "allowance";

/// Account whose balance a burn reduced
pub const ATTR_BURNER: &str = "burner";

/// Receiver of the block reward of a transfer
pub const ATTR_BLOCK_PRODUCER: &str = "block_producer";

pub const ATTR_BLOCK_REWARD: &str = "block_reward";

pub const ATTR_TOTAL_SUPPLY: &str = "total_supply";

pub const ATTR_PREVIOUS_OWNER: &str = "previous_owner";
