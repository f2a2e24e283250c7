//! A single-player blackjack engine with optional `no_std` support.
//!
//! The crate has two parts: a [`DeckBuilder`] that constructs a card
//! sequence through an ordered list of transformations (sort, shuffle,
//! jokers, rank removal, multi-deck replication), and a scoring/dealer
//! engine that expands every achievable total of an Ace-ambiguous hand
//! ([`ScoreSet`]) and drives the dealer's fixed hit/stand policy
//! ([`DealerRules`]).
//!
//! # Example
//!
//! ```
//! use twentyone::{DealerRules, DeckBuilder, Hand};
//!
//! let mut deck = DeckBuilder::new().shuffle().build_seeded(42);
//! let mut player = Hand::new();
//! let mut dealer = Hand::new();
//!
//! deck.deal(&mut player)?;
//! deck.deal(&mut dealer)?;
//! deck.deal(&mut player)?;
//! deck.deal(&mut dealer)?;
//! assert_eq!(deck.len(), 48);
//!
//! let best = player.best_score()?; // None means bust
//! let state = DealerRules::default().play(&mut deck, &mut dealer)?;
//! # let _ = (best, state);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DealerRules, DealerState};
pub use deck::{Deck, DeckBuilder, SortFn};
pub use error::{DealError, DealerError, ScoreError};
pub use hand::Hand;
pub use score::{ScoreSet, TARGET};
