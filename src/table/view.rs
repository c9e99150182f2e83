//! Read-only presentation snapshot.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{DealerHand, Hand, HandValue};

use super::{Phase, Table};

/// One hand as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandView {
    /// Cards in the hand.
    pub cards: Vec<Card>,
    /// Evaluated value of the hand.
    pub value: HandValue,
}

/// The dealer's hand as the presentation layer sees it.
///
/// The hole card is masked as `None` until revealed, and `value` covers
/// only visible cards, so nothing here leaks the hole.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DealerView {
    /// Cards in deal order, the hole card masked while hidden.
    pub cards: Vec<Option<Card>>,
    /// Evaluated value of the visible cards.
    pub value: HandValue,
    /// Whether the hole card is revealed.
    pub hole_revealed: bool,
}

/// A read-only snapshot of the observable table state.
///
/// Everything a renderer needs; hosts never inspect the shoe or the
/// hands directly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableView {
    /// Current phase.
    pub phase: Phase,
    /// Last user-facing status line.
    pub message: &'static str,
    /// Player bankroll.
    pub bankroll: usize,
    /// Bet for the round in progress, if any.
    pub bet: Option<usize>,
    /// The player's hand.
    pub player: HandView,
    /// The dealer's hand.
    pub dealer: DealerView,
    /// Cards remaining in the shoe.
    pub cards_remaining: usize,
}

impl HandView {
    fn of(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
            value: hand.value(),
        }
    }
}

impl DealerView {
    fn of(hand: &DealerHand) -> Self {
        let revealed = hand.is_hole_revealed();
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| (revealed || i != 0).then_some(*card))
            .collect();

        Self {
            cards,
            value: hand.visible_value(),
            hole_revealed: revealed,
        }
    }
}

impl Table {
    /// Returns a read-only snapshot of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> TableView {
        TableView {
            phase: self.phase,
            message: self.message,
            bankroll: self.bankroll,
            bet: self.bet,
            player: HandView::of(&self.player),
            dealer: DealerView::of(&self.dealer),
            cards_remaining: self.shoe.len(),
        }
    }
}
