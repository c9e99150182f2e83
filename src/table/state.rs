//! Round phase and dealer step types.

use crate::card::Card;
use crate::outcome::RoundSummary;

/// Round phase.
///
/// `Betting` is both the initial phase and the restart target; there is
/// no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Accepting a bet for the next round.
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has resolved; play again to continue.
    Resolved,
}

/// Token scoping scheduled dealer steps to the round that issued them.
///
/// Returned by [`stand`](crate::Table::stand). A table reset invalidates
/// outstanding tickets, so a dealer draw scheduled before the reset can
/// never touch the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerTicket {
    /// The round the ticket was issued for.
    pub(super) round: u64,
}

/// One observable step of dealer play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card; schedule another step after the pacing
    /// delay.
    Drew(Card),
    /// The dealer stood or busted and the round settled.
    Settled(RoundSummary),
}
