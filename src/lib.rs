//! A multi-round 21-style card table engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that plays rounds of a blackjack-like
//! game against a dealer: shuffling, dealing, recycling the discard pile,
//! scoring hands with ace-softening, and declaring a winner per player turn.
//!
//! # Example
//!
//! ```
//! use cardtable::{Table, TableOptions, Winner};
//!
//! let options = TableOptions::default().with_players(3);
//! let mut table = Table::new(options, 42).unwrap();
//!
//! let rounds = table.play_rounds(1).unwrap();
//! for turn in &rounds[0].turns {
//!     assert!(matches!(turn.winner, Winner::Player | Winner::Dealer));
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ConfigError, DealError};
pub use hand::{DEFAULT_STAND_THRESHOLD, Hand};
pub use options::{RunConfig, TableOptions};
pub use result::{RoundResult, TurnResult, Winner};
pub use table::{Table, compare_hands};
