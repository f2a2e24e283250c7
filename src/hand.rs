//! Hand representation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::ScoreError;
use crate::score::ScoreSet;

/// An ordered hand of cards belonging to one party.
///
/// A hand only grows during a round; cards are added by dealing and never
/// removed until the hand is discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
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

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

    /// Returns whether the hand contains at least one Ace (a soft hand).
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(|c| c.rank == Rank::Ace)
    }

    /// Expands all achievable totals for this hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand contains a card with no point value.
    pub fn scores(&self) -> Result<ScoreSet, ScoreError> {
        ScoreSet::of(&self.cards)
    }

    /// Returns whether every achievable total exceeds the target.
    ///
    /// An empty hand scores the single total 0 and is never bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand contains a card with no point value.
    pub fn is_bust(&self) -> Result<bool, ScoreError> {
        Ok(self.scores()?.is_bust())
    }

    /// Returns the largest achievable total not exceeding the target, or
    /// `None` if the hand is bust.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand contains a card with no point value.
    pub fn best_score(&self) -> Result<Option<u32>, ScoreError> {
        Ok(self.scores()?.best_valid())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
