//! Table engine and round state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ShoeError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::shoe::Shoe;

mod dealer;
mod intents;
pub mod state;
mod view;

pub use state::{DealerStep, DealerTicket, Phase};
pub use view::{DealerView, HandView, TableView};

/// Status line while a bet can be placed.
const MSG_PLACE_BET: &str = "Place your bet.";
/// Status line after a rejected bet.
const MSG_INVALID_BET: &str = "Invalid bet amount";
/// Status line while the player acts.
const MSG_PLAYER_TURN: &str = "Your turn: Hit or Stand?";
/// Status line while dealer play is pending.
const MSG_DEALER_TURN: &str = "Dealer's turn...";

/// A single-seat blackjack table that owns the full round state.
///
/// The table owns the shoe, both hands, the bankroll and a seeded RNG;
/// there is exactly one writer and every transition goes through an
/// intent method. Hosts render from [`snapshot`](Self::snapshot) after
/// each call. Use [`TableOptions`] to configure decks, bankroll, payout
/// and dealer pacing.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table options.
    options: TableOptions,
    /// The shoe cards are drawn from.
    shoe: Shoe,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Player bankroll in whole currency units.
    bankroll: usize,
    /// The bet for the round in progress, if any.
    bet: Option<usize>,
    /// Current phase.
    phase: Phase,
    /// Last user-facing status line.
    message: &'static str,
    /// Round counter; bumping it invalidates outstanding dealer tickets.
    round: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// The bankroll starts at `options.starting_bankroll`, the phase at
    /// betting, and the shoe freshly shuffled.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::ZeroDecks`] if `options.decks` is zero.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Table, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let table = Table::new(options, 42);
    /// let _ = table;
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ShoeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::fresh(options.decks, &mut rng)?;
        let bankroll = options.starting_bankroll;

        Ok(Self {
            options,
            shoe,
            player: Hand::new(),
            dealer: DealerHand::new(),
            bankroll,
            bet: None,
            phase: Phase::Betting,
            message: MSG_PLACE_BET,
            round: 0,
            rng,
        })
    }

    /// Draws the next card, replacing an exhausted shoe first.
    ///
    /// Exhaustion is recovered internally with a freshly built shoe and
    /// never surfaced to callers.
    fn draw_card(&mut self) -> Card {
        if let Ok(card) = self.shoe.draw() {
            return card;
        }

        self.replace_shoe();
        self.shoe
            .draw()
            .expect("a freshly built shoe holds at least one deck")
    }

    /// Swaps in a freshly built, freshly shuffled shoe.
    fn replace_shoe(&mut self) {
        self.shoe = Shoe::fresh(self.options.decks, &mut self.rng)
            .expect("deck count was validated at construction");
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the last user-facing status line.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the bet for the round in progress, if any.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Replaces the shoe so the next draws come in the given order.
    ///
    /// Deterministic-setup seam for tests and scripted demos.
    pub fn stack_shoe(&mut self, draws: &[Card]) {
        self.shoe = Shoe::stacked(draws);
    }
}
