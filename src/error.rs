//! Error types for deck and scoring operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur when dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards remain in the deck.
    #[error("no cards left in the deck")]
    Exhausted,
}

/// Errors that can occur while scoring a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A card whose rank has no defined point value reached the scorer.
    #[error("rank {0:?} has no defined point value")]
    UndefinedValue(Rank),
}

/// Errors that can occur while the dealer plays out their hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// The deck ran out of cards while the dealer still had to draw.
    #[error("deck exhausted while the dealer must draw")]
    DeckExhausted,
    /// The dealer's hand could not be scored.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
