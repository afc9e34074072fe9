//! Stable attributes
//!
//! The attributes here should only be changed very carefully as it is likely that clients
//! (keepers, explorers) rely on them.

pub const ATTR_ACTION: &str = "action";

/// The Felina token contract the burner burns from
pub const ATTR_TOKEN: &str = "token";

pub const ATTR_OWNER: &str = "owner";

pub const ATTR_PREVIOUS_OWNER: &str = "previous_owner";

/// Amount burnt per upkeep in the smallest unit
pub const ATTR_DAILY_BURN_AMOUNT: &str = "daily_burn_amount";

/// Minimum time between two upkeeps in seconds
pub const ATTR_BURNING_INTERVAL: &str = "burning_interval";

/// Sum of all amounts burnt through this contract after the upkeep
pub const ATTR_TOTAL_BURNT: &str = "total_burnt";

/// Block time of the upkeep
pub const ATTR_LAST_TIMESTAMP: &str = "last_timestamp";
