//! Hand evaluation and player/dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// The evaluated value of a sequence of cards.
///
/// Produced by [`evaluate`]; purely derived, nothing caches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandValue {
    /// Best total under ace rules.
    pub total: u8,
    /// An ace is still counted as 11.
    pub is_soft: bool,
    /// The total exceeds 21.
    pub is_bust: bool,
    /// Exactly two cards totalling 21.
    pub is_blackjack: bool,
}

/// Evaluates a sequence of cards to its best total.
///
/// Aces are counted as 11 until the total would bust, then recounted as 1
/// one at a time. Same cards always evaluate to the same value.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        total = total.saturating_add(card.rank.base_value());
    }

    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    HandValue {
        total,
        is_soft: aces > 0 && total <= 21,
        is_bust: total > 21,
        is_blackjack: cards.len() == 2 && total == 21,
    }
}

/// The player's hand.
///
/// Append-only during a turn; cleared at round start.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Evaluates the hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The first card is the hole card, hidden from public display until
/// revealed. Internal evaluation always sees the full hand.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hole card (first card), if dealt.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Evaluates only the publicly visible cards.
    ///
    /// While the hole card is hidden this skips the first card; once
    /// revealed it matches [`Self::value`].
    #[must_use]
    pub fn visible_value(&self) -> HandValue {
        if self.hole_revealed {
            self.value()
        } else {
            evaluate(self.cards.get(1..).unwrap_or(&[]))
        }
    }

    /// Evaluates the full hand.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}
