//! Dealer hit/stand policy.

use crate::deck::Deck;
use crate::error::DealerError;
use crate::hand::Hand;

/// Dealer state after a policy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerState {
    /// The dealer drew a card and must be evaluated again.
    Drawing,
    /// The dealer stands. Terminal.
    Standing,
    /// Every total of the dealer's hand exceeds the target. Terminal.
    Busted,
}

impl DealerState {
    /// Returns whether this state ends the dealer's turn.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Standing | Self::Busted)
    }
}

/// Thresholds driving the dealer's fixed hit/stand policy.
///
/// The dealer draws while their best valid total is at or below the
/// threshold for the hand type: `soft_draw_to` when the hand holds an Ace,
/// `hard_draw_to` when it does not. The defaults (17 soft, 16 hard) carry
/// an intentional asymmetry: a soft 17 draws another card while a hard 17
/// stands.
///
/// ```
/// use twentyone::DealerRules;
///
/// let rules = DealerRules::default().with_soft_draw_to(16);
/// assert_eq!(rules.soft_draw_to, 16);
/// assert_eq!(rules.hard_draw_to, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DealerRules {
    /// Highest best-valid total at which a hand holding an Ace still draws.
    pub soft_draw_to: u32,
    /// Highest best-valid total at which a hand with no Ace still draws.
    pub hard_draw_to: u32,
}

impl Default for DealerRules {
    fn default() -> Self {
        Self {
            soft_draw_to: 17,
            hard_draw_to: 16,
        }
    }
}

impl DealerRules {
    /// Sets the draw threshold for hands holding an Ace.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::DealerRules;
    ///
    /// let rules = DealerRules::default().with_soft_draw_to(18);
    /// assert_eq!(rules.soft_draw_to, 18);
    /// ```
    #[must_use]
    pub const fn with_soft_draw_to(mut self, total: u32) -> Self {
        self.soft_draw_to = total;
        self
    }

    /// Sets the draw threshold for hands with no Ace.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::DealerRules;
    ///
    /// let rules = DealerRules::default().with_hard_draw_to(15);
    /// assert_eq!(rules.hard_draw_to, 15);
    /// ```
    #[must_use]
    pub const fn with_hard_draw_to(mut self, total: u32) -> Self {
        self.hard_draw_to = total;
        self
    }

    /// Evaluates one step of the dealer policy, drawing at most one card.
    ///
    /// Returns [`DealerState::Busted`] if the hand has no valid total,
    /// [`DealerState::Drawing`] if a card was drawn into `hand`, and
    /// [`DealerState::Standing`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`DealerError::DeckExhausted`] if the policy requires a draw
    /// but the deck is empty, and a score error if the hand contains a card
    /// with no point value. Either aborts the round.
    pub fn step(&self, deck: &mut Deck, hand: &mut Hand) -> Result<DealerState, DealerError> {
        let Some(best) = hand.best_score()? else {
            return Ok(DealerState::Busted);
        };

        let threshold = if hand.has_ace() {
            self.soft_draw_to
        } else {
            self.hard_draw_to
        };

        if best <= threshold {
            let card = deck.draw().ok_or(DealerError::DeckExhausted)?;
            hand.add_card(card);
            Ok(DealerState::Drawing)
        } else {
            Ok(DealerState::Standing)
        }
    }

    /// Runs the dealer policy to a terminal state, drawing into `hand`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::step`].
    pub fn play(&self, deck: &mut Deck, hand: &mut Hand) -> Result<DealerState, DealerError> {
        loop {
            let state = self.step(deck, hand)?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }
}
