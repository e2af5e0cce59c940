//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use solitaire_engine::core::{new_deck, Card, GameState, Pile, PileRole, SuitMode, Variant};
use solitaire_engine::{KlondikeConfig, KlondikeGame, SpiderConfig, SpiderGame, Suit};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per test binary.
///
/// Filter comes from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

/// Card from the canonical one-suit Spider deck: copy `copy`, rank `rank`.
pub fn spade(copy: u16, rank: u16, face_up: bool) -> Card {
    let mut card = new_deck(Variant::Spider(SuitMode::One))[usize::from(copy * 13 + rank - 1)];
    card.face_up = face_up;
    card
}

/// Card from the canonical Klondike deck.
pub fn klondike_card(suit: Suit, rank: u16, face_up: bool) -> Card {
    let suit_index = Suit::ALL.iter().position(|&s| s == suit).unwrap() as u16;
    let mut card = new_deck(Variant::Klondike)[usize::from(suit_index * 13 + rank - 1)];
    card.face_up = face_up;
    card
}

/// Lay out `columns` and `foundations` (each padded to its count) and put
/// every other card of `deck` into the stock face-down.
pub fn layout(
    deck: Vec<Card>,
    columns: Vec<Vec<Card>>,
    foundations: Vec<Vec<Card>>,
    (tableau_count, foundation_count): (usize, usize),
    score: i32,
) -> GameState {
    let used: Vec<_> = columns
        .iter()
        .chain(&foundations)
        .flatten()
        .map(|c| c.id())
        .collect();
    let deck_size = deck.len();
    let stock: Vec<Card> = deck.into_iter().filter(|c| !used.contains(&c.id())).collect();

    let mut tableaux: Vec<Pile> = columns
        .into_iter()
        .map(|cards| Pile::with_cards(PileRole::Tableau, cards))
        .collect();
    tableaux.resize(tableau_count, Pile::new(PileRole::Tableau));
    let mut foundation_piles: Vec<Pile> = foundations
        .into_iter()
        .map(|cards| Pile::with_cards(PileRole::Foundation, cards))
        .collect();
    foundation_piles.resize(foundation_count, Pile::new(PileRole::Foundation));

    GameState::from_layout(
        tableaux,
        foundation_piles,
        Pile::with_cards(PileRole::Stock, stock),
        Pile::new(PileRole::Waste),
        deck_size,
        score,
    )
}

/// One-suit Spider game with explicit columns.
pub fn spider_with(columns: Vec<Vec<Card>>) -> SpiderGame {
    spider_with_foundations(columns, Vec::new())
}

/// One-suit Spider game with explicit columns and foundations.
pub fn spider_with_foundations(columns: Vec<Vec<Card>>, foundations: Vec<Vec<Card>>) -> SpiderGame {
    let deck = new_deck(Variant::Spider(SuitMode::One));
    let state = layout(deck, columns, foundations, (10, 8), 500);
    SpiderGame::from_state(SpiderConfig::default(), state).unwrap()
}

/// Klondike game with explicit columns.
pub fn klondike_with(columns: Vec<Vec<Card>>) -> KlondikeGame {
    let state = layout(new_deck(Variant::Klondike), columns, Vec::new(), (7, 4), 500);
    KlondikeGame::from_state(KlondikeConfig::default(), state).unwrap()
}

/// Face-up King-to-`low` run of one-suit Spider copy `copy`.
pub fn descending(copy: u16, low: u16) -> Vec<Card> {
    (low..=13).rev().map(|rank| spade(copy, rank, true)).collect()
}
