//! Deck construction and seeded shuffling.

use super::card::{Card, CardId, Rank, Suit};
use super::config::Variant;
use super::rng::GameRng;

/// Build the canonical, unshuffled deck for a variant.
///
/// Klondike gets one card of every suit/rank pair. Spider gets 104 cards:
/// the suit mode's suits are repeated until two full decks' worth of
/// (suit, rank) slots are filled, so one-suit mode yields eight Spades of
/// each rank. All cards start face-down with ids `0..len`.
#[must_use]
pub fn new_deck(variant: Variant) -> Vec<Card> {
    let suits: &[_] = match variant {
        Variant::Klondike => &Suit::ALL[..],
        Variant::Spider(mode) => mode.suits(),
    };
    let size = variant.deck_size();
    let copies = size / (13 * suits.len());

    let mut deck = Vec::with_capacity(size);
    for _ in 0..copies {
        for &suit in suits {
            for rank in Rank::all() {
                let id = CardId::new(deck.len() as u16);
                deck.push(Card::with_rank(id, suit, rank, false));
            }
        }
    }
    deck
}

/// Return `deck` permuted by a seeded Fisher–Yates shuffle.
///
/// The same seed always yields the same order.
#[must_use]
pub fn shuffle(mut deck: Vec<Card>, seed: u64) -> Vec<Card> {
    GameRng::new(seed).shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SuitMode;
    use rustc_hash::FxHashMap;

    fn face_counts(deck: &[Card]) -> FxHashMap<(Suit, Rank), usize> {
        let mut counts = FxHashMap::default();
        for card in deck {
            *counts.entry((card.suit(), card.rank())).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_klondike_deck() {
        let deck = new_deck(Variant::Klondike);

        assert_eq!(deck.len(), 52);
        let counts = face_counts(&deck);
        assert_eq!(counts.len(), 52);
        assert!(counts.values().all(|&n| n == 1));
        assert!(deck.iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_spider_one_suit_deck() {
        let deck = new_deck(Variant::Spider(SuitMode::One));

        assert_eq!(deck.len(), 104);
        assert!(deck.iter().all(|c| c.suit() == Suit::Spades));
        let counts = face_counts(&deck);
        assert_eq!(counts.len(), 13);
        assert!(counts.values().all(|&n| n == 8));
    }

    #[test]
    fn test_spider_two_and_four_suit_decks() {
        let two = face_counts(&new_deck(Variant::Spider(SuitMode::Two)));
        assert_eq!(two.len(), 26);
        assert!(two.values().all(|&n| n == 4));

        let four = face_counts(&new_deck(Variant::Spider(SuitMode::Four)));
        assert_eq!(four.len(), 52);
        assert!(four.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_are_unique() {
        let deck = new_deck(Variant::Spider(SuitMode::Four));
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id().raw() as usize, i);
        }
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let a = shuffle(new_deck(Variant::Klondike), 42);
        let b = shuffle(new_deck(Variant::Klondike), 42);
        let c = shuffle(new_deck(Variant::Klondike), 43);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, new_deck(Variant::Klondike));
    }
}
