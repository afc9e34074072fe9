use cosmwasm_std::{OverflowError, Uint128};

/// Number of fractional digits of the Felina token
pub const DECIMALS: u8 = 18;

/// Converts an amount of whole tokens into the smallest unit of a token
/// with `decimals` fractional digits.
pub fn whole_tokens(amount: Uint128, decimals: u8) -> Result<Uint128, OverflowError> {
    let unit = Uint128::new(10).checked_pow(decimals.into())?;
    amount.checked_mul(unit)
}
