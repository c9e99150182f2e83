//! A single-seat blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that owns the full round flow:
//! betting, the opening deal, player actions, paced dealer play and
//! settlement against the bankroll. Hosts drive it with intents and
//! render from read-only snapshots.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42);
//! let _ = table;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bet;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod shoe;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{ActionError, BetError, DealerError, ShoeError};
pub use hand::{DealerHand, Hand, HandValue};
pub use options::{RoundingMode, TableOptions};
pub use outcome::{Outcome, RoundSummary};
pub use shoe::Shoe;
pub use table::{DealerStep, DealerTicket, DealerView, HandView, Phase, Table, TableView};
