//! Wager parsing and validation.

use crate::error::BetError;

/// Parses number-like bet input into a positive integer amount.
///
/// Input is parsed strictly; junk is rejected rather than coerced.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] for input that does not parse as an
/// integer or does not fit the platform's amount range, and
/// [`BetError::NonPositive`] for zero or negative amounts.
pub fn parse(raw: &str) -> Result<usize, BetError> {
    let amount: i64 = raw.trim().parse().map_err(|_| BetError::NotANumber)?;
    if amount <= 0 {
        return Err(BetError::NonPositive);
    }
    usize::try_from(amount).map_err(|_| BetError::NotANumber)
}

/// Validates a wager against the bankroll.
///
/// A valid bet satisfies `0 < amount <= bankroll`. On success returns the
/// accepted amount; debiting the bankroll is the caller's job.
///
/// # Errors
///
/// Returns [`BetError::NonPositive`] if `amount` is zero and
/// [`BetError::InsufficientFunds`] if `amount` exceeds `bankroll`.
pub const fn validate(amount: usize, bankroll: usize) -> Result<usize, BetError> {
    if amount == 0 {
        return Err(BetError::NonPositive);
    }
    if amount > bankroll {
        return Err(BetError::InsufficientFunds);
    }
    Ok(amount)
}
