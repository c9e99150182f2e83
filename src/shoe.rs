//! The multi-deck card shoe.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered pool of cards built from whole 52-card decks.
///
/// Shrinks by exactly one card per [`draw`](Self::draw); nothing else
/// removes cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards, next draw at the back.
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds an unshuffled shoe of `deck_count` whole decks.
    ///
    /// Each (suit, rank) pair appears exactly `deck_count` times.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::ZeroDecks`] if `deck_count` is zero.
    pub fn ordered(deck_count: u8) -> Result<Self, ShoeError> {
        if deck_count == 0 {
            return Err(ShoeError::ZeroDecks);
        }

        let mut cards = Vec::with_capacity(DECK_SIZE * deck_count as usize);
        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        Ok(Self { cards })
    }

    /// Shuffles the shoe with a Fisher-Yates pass, consuming it.
    ///
    /// The result holds the same multiset of cards in a uniformly random
    /// order; the input sequence is no longer reachable.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cards.shuffle(rng);
        self
    }

    /// Builds a freshly shuffled shoe of `deck_count` decks.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::ZeroDecks`] if `deck_count` is zero.
    pub fn fresh<R: Rng + ?Sized>(deck_count: u8, rng: &mut R) -> Result<Self, ShoeError> {
        Ok(Self::ordered(deck_count)?.shuffled(rng))
    }

    /// Builds a shoe that yields exactly `draws`, in the given order.
    ///
    /// Intended for deterministic round setups in tests and demos.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, next draw last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Returns whether any (suit, rank) pair occurs more than once.
///
/// An integrity self-check, not a gameplay rule: a shoe built from more
/// than one deck reports true, a hand of distinct cards reports false,
/// empty input reports false.
#[must_use]
pub fn contains_duplicates(cards: &[Card]) -> bool {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(*card) {
            return true;
        }
    }
    false
}
