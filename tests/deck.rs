//! Deck builder integration tests.

use std::collections::HashMap;

use twentyone::{Card, DECK_SIZE, DealError, Deck, DeckBuilder, Hand, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn standard_deck_is_52_unique_cards() {
    let deck = Deck::standard();
    assert_eq!(deck.len(), DECK_SIZE);

    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
    let mut seen: Vec<Card> = Vec::new();

    for &c in deck.cards() {
        assert!(!seen.contains(&c), "duplicate card {c}");
        seen.push(c);
        *rank_counts.entry(c.rank).or_default() += 1;
        *suit_counts.entry(c.suit).or_default() += 1;
    }

    assert_eq!(rank_counts.len(), 13);
    assert!(rank_counts.values().all(|&n| n == 4));
    assert_eq!(suit_counts.len(), 4);
    assert!(suit_counts.values().all(|&n| n == 13));
}

#[test]
fn standard_deck_base_order() {
    let deck = Deck::standard();
    assert_eq!(deck.cards()[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[12], card(Suit::Spades, Rank::King));
    assert_eq!(deck.cards()[13], card(Suit::Diamonds, Rank::Ace));
    assert_eq!(deck.cards()[51], card(Suit::Hearts, Rank::King));
}

#[test]
fn shuffle_is_a_permutation() {
    let shuffled = DeckBuilder::new().shuffle().build_seeded(42);
    assert_eq!(shuffled.len(), DECK_SIZE);

    let mut sorted: Vec<Card> = shuffled.cards().to_vec();
    sorted.sort();
    let mut base: Vec<Card> = Deck::standard().cards().to_vec();
    base.sort();
    assert_eq!(sorted, base);
}

#[test]
fn shuffle_is_reproducible_for_equal_seeds() {
    let a = DeckBuilder::new().shuffle().build_seeded(7);
    let b = DeckBuilder::new().shuffle().build_seeded(7);
    let c = DeckBuilder::new().shuffle().build_seeded(8);

    assert_eq!(a, b);
    assert_ne!(a, c, "different seeds should permute differently");
}

#[test]
fn default_sort_restores_base_order() {
    let deck = DeckBuilder::new().shuffle().sort().build_seeded(42);
    assert_eq!(deck.cards(), Deck::standard().cards());
}

#[test]
fn custom_sort_orders_rank_major() {
    let deck = DeckBuilder::new()
        .shuffle()
        .sort_by(|a, b| a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)))
        .build_seeded(3);

    assert_eq!(deck.cards()[0], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[3], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[4], card(Suit::Spades, Rank::Two));
    assert_eq!(deck.cards()[51], card(Suit::Hearts, Rank::King));
}

#[test]
fn add_jokers_appends_to_the_end() {
    let deck = DeckBuilder::new().add_jokers(2).build_seeded(0);
    assert_eq!(deck.len(), 54);
    assert_eq!(deck.cards()[52], Card::JOKER);
    assert_eq!(deck.cards()[53], Card::JOKER);
    assert!(!deck.cards()[..52].iter().any(Card::is_joker));
}

#[test]
fn remove_rank_strips_all_four() {
    let deck = DeckBuilder::new().remove_rank(Rank::King).build_seeded(0);
    assert_eq!(deck.len(), 48);
    assert!(deck.cards().iter().all(|c| c.rank != Rank::King));
}

#[test]
fn remove_absent_rank_is_a_noop() {
    let deck = DeckBuilder::new()
        .remove_rank(Rank::Queen)
        .remove_rank(Rank::Queen)
        .build_seeded(0);
    assert_eq!(deck.len(), 48);
}

#[test]
fn remove_rank_from_shoe_strips_every_copy() {
    let deck = DeckBuilder::new()
        .replicate(2)
        .remove_rank(Rank::Ace)
        .build_seeded(0);
    assert_eq!(deck.len(), 3 * 48);
    assert!(deck.cards().iter().all(|c| c.rank != Rank::Ace));
}

#[test]
fn replicate_builds_a_shoe_in_base_order() {
    let deck = DeckBuilder::new().replicate(2).build_seeded(0);
    assert_eq!(deck.len(), 3 * DECK_SIZE);
    // Appended decks ignore earlier steps and arrive in base order.
    assert_eq!(deck.cards()[DECK_SIZE], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[2 * DECK_SIZE], card(Suit::Spades, Rank::Ace));
}

#[test]
fn replicate_ignores_prior_transformations() {
    let deck = DeckBuilder::new()
        .remove_rank(Rank::King)
        .replicate(1)
        .build_seeded(0);
    // First 48 cards are king-free, the appended deck is complete.
    assert_eq!(deck.len(), 48 + DECK_SIZE);
    assert!(deck.cards()[..48].iter().all(|c| c.rank != Rank::King));
    let kings = deck
        .cards()
        .iter()
        .filter(|c| c.rank == Rank::King)
        .count();
    assert_eq!(kings, 4);
}

#[test]
fn steps_apply_in_caller_order() {
    // Jokers added before the removal step survive it; jokers added after a
    // sort land at the end.
    let deck = DeckBuilder::new()
        .add_jokers(1)
        .remove_rank(Rank::Two)
        .sort()
        .add_jokers(1)
        .build_seeded(0);

    assert_eq!(deck.len(), 50);
    let jokers = deck.cards().iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers, 2);
    assert_eq!(deck.cards()[49], Card::JOKER);
}

#[test]
fn deal_moves_the_top_card_into_the_hand() {
    let mut deck = Deck::standard();
    let mut hand = Hand::new();

    let dealt = deck.deal(&mut hand).unwrap();
    assert_eq!(dealt, card(Suit::Hearts, Rank::King));
    assert_eq!(deck.len(), 51);
    assert_eq!(hand.cards(), &[dealt]);
    assert!(!deck.cards().contains(&dealt));
}

#[test]
fn dealing_from_an_empty_deck_fails() {
    let mut deck = Deck::standard();
    let mut hand = Hand::new();

    while deck.draw().is_some() {}
    assert!(deck.is_empty());
    assert_eq!(deck.deal(&mut hand).unwrap_err(), DealError::Exhausted);
    assert!(hand.is_empty());
}
