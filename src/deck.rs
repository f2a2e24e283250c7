//! Deck construction and the transformation builder.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::hand::Hand;

/// An ordered deck of cards.
///
/// Cards leave the deck only by being dealt; a card is never simultaneously
/// in the deck and in a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a fresh standard 52-card deck in base order: suits
    /// Spades through Hearts, ranks Ace through King within each suit.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence.
    ///
    /// The back of the sequence is the top of the deck, so the last card is
    /// the first one dealt. Useful for scripting exact draws in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the remaining cards, front to back. The back is the top of
    /// the deck: the next card dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals the top card into the given hand.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] if the deck is empty.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<Card, DealError> {
        let card = self.draw().ok_or(DealError::Exhausted)?;
        hand.add_card(card);
        Ok(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// A caller-supplied card comparison for [`DeckBuilder::sort_by`].
pub type SortFn = Box<dyn Fn(&Card, &Card) -> Ordering + Send + Sync>;

enum Step {
    Sort(Option<SortFn>),
    Shuffle,
    AddJokers(usize),
    RemoveRank(Rank),
    Replicate(usize),
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort(None) => f.write_str("Sort(default)"),
            Self::Sort(Some(_)) => f.write_str("Sort(custom)"),
            Self::Shuffle => f.write_str("Shuffle"),
            Self::AddJokers(n) => write!(f, "AddJokers({n})"),
            Self::RemoveRank(r) => write!(f, "RemoveRank({r:?})"),
            Self::Replicate(n) => write!(f, "Replicate({n})"),
        }
    }
}

/// Builds a deck from the standard base order plus an ordered list of
/// transformation steps.
///
/// Steps run in the order they were added, each mutating the in-progress
/// card sequence. All steps are total: there is no way for a build to fail.
///
/// # Example
///
/// ```
/// use twentyone::DeckBuilder;
///
/// // A two-deck shoe with the Tens stripped, then shuffled.
/// let deck = DeckBuilder::new()
///     .replicate(1)
///     .remove_rank(twentyone::Rank::Ten)
///     .shuffle()
///     .build_seeded(42);
/// assert_eq!(deck.len(), 96);
/// ```
#[derive(Debug, Default)]
pub struct DeckBuilder {
    steps: Vec<Step>,
}

impl DeckBuilder {
    /// Creates a builder with no transformation steps.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Sorts by suit index, then rank index, ascending.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, DeckBuilder, Rank, Suit};
    ///
    /// let deck = DeckBuilder::new().shuffle().sort().build_seeded(7);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Ace));
    /// ```
    #[must_use]
    pub fn sort(mut self) -> Self {
        self.steps.push(Step::Sort(None));
        self
    }

    /// Sorts with a caller-supplied comparison.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, DeckBuilder, Rank, Suit};
    ///
    /// // Rank-major instead of suit-major.
    /// let deck = DeckBuilder::new()
    ///     .sort_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)))
    ///     .build_seeded(0);
    /// assert_eq!(deck.cards()[1], Card::new(Suit::Diamonds, Rank::Ace));
    /// ```
    #[must_use]
    pub fn sort_by<F>(mut self, cmp: F) -> Self
    where
        F: Fn(&Card, &Card) -> Ordering + Send + Sync + 'static,
    {
        self.steps.push(Step::Sort(Some(Box::new(cmp))));
        self
    }

    /// Shuffles into a uniformly random permutation using the build RNG.
    #[must_use]
    pub fn shuffle(mut self) -> Self {
        self.steps.push(Step::Shuffle);
        self
    }

    /// Appends `count` Joker cards to the end of the sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{Card, DeckBuilder};
    ///
    /// let deck = DeckBuilder::new().add_jokers(2).build_seeded(0);
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.cards()[53], Card::JOKER);
    /// ```
    #[must_use]
    pub fn add_jokers(mut self, count: usize) -> Self {
        self.steps.push(Step::AddJokers(count));
        self
    }

    /// Removes every card of the given rank.
    ///
    /// Removal swaps the last card into the vacated slot, so the relative
    /// order of the remaining cards is not preserved. Removing a rank that
    /// is not present is a no-op.
    #[must_use]
    pub fn remove_rank(mut self, rank: Rank) -> Self {
        self.steps.push(Step::RemoveRank(rank));
        self
    }

    /// Appends `count` additional freshly built standard 52-card decks,
    /// producing a multi-deck shoe. The appended decks are in base order
    /// regardless of any earlier steps.
    #[must_use]
    pub fn replicate(mut self, count: usize) -> Self {
        self.steps.push(Step::Replicate(count));
        self
    }

    /// Builds the deck, drawing any shuffle randomness from `rng`.
    #[must_use]
    pub fn build<R: Rng + ?Sized>(self, rng: &mut R) -> Deck {
        let mut deck = Deck::standard();
        for step in self.steps {
            apply(&mut deck.cards, &step, rng);
        }
        deck
    }

    /// Builds the deck with a ChaCha8 RNG seeded from `seed`.
    ///
    /// Equal seeds and equal step lists produce identical decks, so
    /// shuffled layouts are reproducible.
    #[must_use]
    pub fn build_seeded(self, seed: u64) -> Deck {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.build(&mut rng)
    }
}

fn apply<R: Rng + ?Sized>(cards: &mut Vec<Card>, step: &Step, rng: &mut R) {
    match step {
        Step::Sort(None) => cards.sort_unstable(),
        Step::Sort(Some(cmp)) => cards.sort_by(cmp),
        Step::Shuffle => cards.shuffle(rng),
        Step::AddJokers(count) => {
            for _ in 0..*count {
                cards.push(Card::JOKER);
            }
        }
        Step::RemoveRank(rank) => {
            let mut i = 0;
            while i < cards.len() {
                if cards[i].rank == *rank {
                    cards.swap_remove(i);
                } else {
                    i += 1;
                }
            }
        }
        Step::Replicate(count) => {
            for _ in 0..*count {
                cards.extend_from_slice(Deck::standard().cards());
            }
        }
    }
}
