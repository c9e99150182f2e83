//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when building or drawing from a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// Deck count is zero.
    #[error("deck count must be at least one")]
    ZeroDecks,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid table phase for betting.
    #[error("invalid table phase for betting")]
    InvalidState,
    /// Bet input is not a number.
    #[error("bet amount is not a number")]
    NotANumber,
    /// Bet amount is zero or negative.
    #[error("bet amount must be positive")]
    NonPositive,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table phase for this action.
    #[error("invalid table phase for this action")]
    InvalidState,
}

/// Errors that can occur while driving dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid table phase for dealer play.
    #[error("invalid table phase for dealer play")]
    InvalidState,
    /// The ticket belongs to a round that was reset.
    #[error("dealer sequence was cancelled by a table reset")]
    Cancelled,
}
