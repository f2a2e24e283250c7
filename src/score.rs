//! Multi-valued hand scoring.
//!
//! A hand containing Aces does not have a single total: each Ace counts as
//! 1 or 11, so a hand with `k` Aces has `2^k` achievable totals (as a raw
//! multiset, duplicates included). [`ScoreSet`] holds that expansion and
//! answers the bust and best-total questions derived from it.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::ScoreError;

/// The winning target total.
pub const TARGET: u32 = 21;

const fn pip_value(rank: Rank) -> Option<u32> {
    match rank {
        Rank::Jack | Rank::Queen | Rank::King => Some(10),
        Rank::Joker => None,
        // Ace is handled by branching, but on its low branch it is worth 1,
        // which is exactly its discriminant.
        r => Some(r as u32),
    }
}

/// The achievable totals for one hand.
///
/// Totals are kept as a raw multiset: one entry per combination of Ace
/// interpretations, duplicates preserved. `[Ace, Ace]` therefore has four
/// totals, `{2, 12, 12, 22}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSet {
    totals: Vec<u32>,
}

impl ScoreSet {
    /// Expands the achievable totals for the given cards.
    ///
    /// Cards are consumed from the last to the first; each Ace forks the
    /// accumulated total into a +1 and a +11 continuation. The expansion is
    /// an explicit worklist rather than recursion, so hands with many Aces
    /// cannot overflow the stack. An empty slice yields the single total 0.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::UndefinedValue`] if any card has no point
    /// value (a Joker).
    pub fn of(cards: &[Card]) -> Result<Self, ScoreError> {
        // Jokers are rejected up front so the error does not depend on how
        // far the expansion happened to get.
        if let Some(joker) = cards.iter().find(|c| c.is_joker()) {
            return Err(ScoreError::UndefinedValue(joker.rank));
        }

        let mut totals = Vec::new();
        // (cards still to consume, total so far)
        let mut worklist: Vec<(usize, u32)> = alloc::vec![(cards.len(), 0)];

        while let Some((remaining, total)) = worklist.pop() {
            if remaining == 0 {
                totals.push(total);
                continue;
            }
            let card = cards[remaining - 1];
            if card.rank == Rank::Ace {
                worklist.push((remaining - 1, total + 1));
                worklist.push((remaining - 1, total + 11));
            } else {
                // Joker was ruled out above, so a value always exists.
                let value = pip_value(card.rank).ok_or(ScoreError::UndefinedValue(card.rank))?;
                worklist.push((remaining - 1, total + value));
            }
        }

        Ok(Self { totals })
    }

    /// Returns all achievable totals, duplicates included.
    #[must_use]
    pub fn totals(&self) -> &[u32] {
        &self.totals
    }

    /// Returns the totals that do not exceed [`TARGET`], ascending.
    #[must_use]
    pub fn valid(&self) -> Vec<u32> {
        let mut valid: Vec<u32> = self
            .totals
            .iter()
            .copied()
            .filter(|&t| t <= TARGET)
            .collect();
        valid.sort_unstable();
        valid
    }

    /// Returns whether every achievable total exceeds [`TARGET`].
    ///
    /// The empty hand scores the single total 0 and is never bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.totals.iter().all(|&t| t > TARGET)
    }

    /// Returns the largest total not exceeding [`TARGET`], or `None` if the
    /// hand is bust.
    #[must_use]
    pub fn best_valid(&self) -> Option<u32> {
        self.totals.iter().copied().filter(|&t| t <= TARGET).max()
    }
}
