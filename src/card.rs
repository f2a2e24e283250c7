//! Card, rank, and suit types.

use core::fmt;

/// Card suit.
///
/// The declaration order (Spades first, Hearts last) is the suit order used
/// by the default deck sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// The suit carried by Joker cards.
    Joker,
}

impl Suit {
    /// The four suits of a standard deck, in base construction order.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spades => "Spades",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Joker => "Joker",
        };
        f.write_str(name)
    }
}

/// Card rank.
///
/// Discriminants run Ace = 1 through King = 13, so the derived ordering is
/// the rank order used by the default deck sort. `Joker` has no point value
/// and is rejected by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack, worth 10.
    Jack,
    /// Queen, worth 10.
    Queen,
    /// King, worth 10.
    King,
    /// Joker. Only produced by the deck builder; has no point value.
    Joker,
}

impl Rank {
    /// The thirteen ranks of a standard deck, Ace through King.
    pub const STANDARD: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        };
        f.write_str(name)
    }
}

/// A playing card.
///
/// Field order (suit before rank) makes the derived ordering match the
/// default deck sort: suit index first, rank index second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// A Joker card.
    pub const JOKER: Self = Self::new(Suit::Joker, Rank::Joker);

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is a Joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str("Joker")
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;
