//! Round outcomes and settlement summaries.

/// How a round resolved.
///
/// Computed at resolution and returned to the caller; the table never
/// stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player busted; bet forfeited.
    PlayerBust,
    /// Dealer busted; player wins.
    DealerBust,
    /// Player dealt a natural 21.
    PlayerBlackjack,
    /// Player total beats dealer total.
    PlayerWin,
    /// Dealer total beats player total.
    DealerWin,
    /// Equal totals; stake returned.
    Push,
}

impl Outcome {
    /// The user-facing status line for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust! You lose.",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerBlackjack => "Blackjack! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "Push.",
        }
    }
}

/// Settlement record for one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The bet amount for the round.
    pub bet: usize,
    /// The payout credited to the bankroll (stake included where returned).
    pub payout: usize,
    /// The player's final hand total.
    pub player_total: u8,
    /// The dealer's final hand total.
    pub dealer_total: u8,
}
