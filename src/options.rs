//! Table configuration options.

use core::time::Duration;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Defaults to a six-deck shoe, a bankroll of 1000, blackjack paying
/// 3:2 and a dealer who hits soft 17.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(4)
///     .with_blackjack_pays(1.5)
///     .with_starting_bankroll(500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Bankroll the player starts the session with.
    pub starting_bankroll: usize,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Recommended delay between dealer draw steps.
    ///
    /// The table never sleeps; hosts pace [`dealer_step`] calls with this.
    ///
    /// [`dealer_step`]: crate::Table::dealer_step
    pub dealer_step_delay: Duration,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_bankroll: 1000,
            blackjack_pays: 1.5,
            stand_on_soft_17: false,
            rounding_blackjack: RoundingMode::Down,
            dealer_step_delay: Duration::from_millis(750),
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(4);
    /// assert_eq!(options.decks, 4);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(500);
    /// assert_eq!(options.starting_bankroll, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(true);
    /// assert_eq!(options.stand_on_soft_17, true);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the recommended delay between dealer draw steps.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_step_delay(Duration::from_millis(500));
    /// assert_eq!(options.dealer_step_delay, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_dealer_step_delay(mut self, delay: Duration) -> Self {
        self.dealer_step_delay = delay;
        self
    }
}
