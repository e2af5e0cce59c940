//! Klondike engine integration tests.
//!
//! These tests verify tableau and foundation legality, stock handling and
//! win detection through `KlondikeGame`'s public commands.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{init_logging, klondike_card as card, klondike_with};
use solitaire_engine::{
    EngineEvent, EventLog, KlondikeConfig, KlondikeGame, PileRef, Solitaire, Suit,
};

// =============================================================================
// Dealing
// =============================================================================

/// Columns hold 1 to 7 cards with only the top face-up; 24 cards remain.
#[test]
fn test_opening_deal_layout() {
    init_logging();
    let game = KlondikeGame::new(KlondikeConfig::default(), 42).unwrap();

    for (i, column) in game.tableaux().iter().enumerate() {
        assert_eq!(column.len(), i + 1);
        assert!(column.top().unwrap().face_up);
        assert_eq!(column.cards().iter().filter(|c| c.face_up).count(), 1);
    }
    assert_eq!(game.stock().len(), 24);
    assert!(game.foundations().iter().all(|f| f.is_empty()));
    assert_eq!(game.state().all_cards().count(), 52);
}

/// A fresh deal starts at 500 points and draws and moves never change it.
#[test]
fn test_score_fixed_at_start() {
    init_logging();
    let mut game = KlondikeGame::new(KlondikeConfig::default(), 8).unwrap();
    assert_eq!(game.score(), 500);

    for _ in 0..30 {
        assert!(game.draw_stock().unwrap());
    }
    assert_eq!(game.move_count(), 30);
    assert_eq!(game.score(), 500);

    assert!(game.undo().unwrap());
    assert_eq!(game.score(), 500);
}

/// `new_game(42)` twice gives the same tableau and stock order.
#[test]
fn test_deal_is_deterministic() {
    init_logging();
    let mut game = KlondikeGame::new(KlondikeConfig::default(), 42).unwrap();
    let first = game.state().clone();

    game.draw_stock().unwrap();
    game.new_game(42);

    assert_eq!(game.state(), &first);
    assert_eq!(game.seed(), 42);
}

// =============================================================================
// Tableau Legality
// =============================================================================

/// Only a King may start an empty column.
#[test]
fn test_only_king_on_empty_column() {
    init_logging();
    let mut game = klondike_with(vec![
        vec![card(Suit::Spades, 12, true)],
        vec![card(Suit::Hearts, 13, true)],
    ]);

    assert!(!game.move_run(0, 1, 4).unwrap());
    assert!(game.move_run(1, 1, 4).unwrap());
    assert!(game.tableaux()[1].is_empty());
}

/// A red 7 goes on a black 8 but not a red 8 or a black 6.
#[test]
fn test_alternating_colours() {
    init_logging();
    let mut game = klondike_with(vec![
        vec![card(Suit::Hearts, 7, true)],
        vec![card(Suit::Diamonds, 8, true)],
        vec![card(Suit::Clubs, 6, true)],
        vec![card(Suit::Spades, 8, true)],
    ]);
    let before = game.state().clone();

    assert!(!game.move_run(0, 1, 1).unwrap());
    assert!(!game.move_run(0, 1, 2).unwrap());
    assert_eq!(game.state(), &before);

    assert!(game.move_run(0, 1, 3).unwrap());
    assert_eq!(game.tableaux()[3].len(), 2);
}

/// An alternating run moves as a block and reveals the card beneath.
#[test]
fn test_run_move_reveals() {
    init_logging();
    let mut game = klondike_with(vec![
        vec![
            card(Suit::Clubs, 1, false),
            card(Suit::Spades, 9, true),
            card(Suit::Hearts, 8, true),
            card(Suit::Clubs, 7, true),
        ],
        vec![card(Suit::Diamonds, 10, true)],
    ]);

    assert!(game.move_run(0, 3, 1).unwrap());
    assert_eq!(game.tableaux()[1].len(), 4);
    assert!(game.tableaux()[0].top().unwrap().face_up);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.score(), 500);
}

// =============================================================================
// Foundations and Winning
// =============================================================================

/// Foundations start with an Ace and build up by suit.
#[test]
fn test_foundation_building() {
    init_logging();
    let mut game = klondike_with(vec![
        vec![card(Suit::Hearts, 2, true)],
        vec![card(Suit::Spades, 1, true)],
        vec![card(Suit::Hearts, 1, true)],
    ]);

    assert!(!game.move_to_foundation(PileRef::Tableau(0), 0).unwrap());
    assert!(game.move_to_foundation(PileRef::Tableau(1), 0).unwrap());
    // 2♥ doesn't go on A♠.
    assert!(!game.move_to_foundation(PileRef::Tableau(0), 0).unwrap());
    assert!(game.move_to_any_foundation(PileRef::Tableau(2)).unwrap());
    assert!(game.move_to_any_foundation(PileRef::Tableau(0)).unwrap());

    assert_eq!(game.foundations()[0].len(), 1);
    assert_eq!(game.foundations()[1].len(), 2);
}

/// Playing every card to the foundations wins exactly once.
#[test]
fn test_win_by_auto_complete() {
    init_logging();
    let columns = Suit::ALL
        .iter()
        .map(|&suit| (1..=13).rev().map(|rank| card(suit, rank, true)).collect())
        .collect();
    let mut game = klondike_with(columns);
    let log = Rc::new(RefCell::new(EventLog::new()));
    game.subscribe(Box::new(Rc::clone(&log)));

    assert!(game.can_auto_complete());
    let mut played = 0;
    while !game.is_win() {
        let moved = (0..4)
            .map(|column| game.move_to_any_foundation(PileRef::Tableau(column)).unwrap())
            .fold(false, |any, m| any || m);
        assert!(moved, "auto-complete stalled");
        played += 1;
    }

    assert_eq!(played, 13);
    assert_eq!(game.move_count(), 52);
    assert!(game.foundations().iter().all(|f| f.len() == 13));

    let events = log.borrow();
    assert_eq!(events.events().iter().filter(|e| **e == EngineEvent::Win).count(), 1);
    assert_eq!(events.events().last(), Some(&EngineEvent::Win));
    // Klondike never changes the score.
    assert!(!events.events().iter().any(|e| matches!(e, EngineEvent::Score(_))));
}

// =============================================================================
// Stock and Waste
// =============================================================================

/// Draw-one walks the whole stock, then the waste is recycled in order.
#[test]
fn test_draw_one_and_recycle() {
    init_logging();
    let mut game = KlondikeGame::new(KlondikeConfig::default(), 17).unwrap();
    let stock_order: Vec<_> = game.stock().cards().iter().rev().map(|c| c.id()).collect();

    for _ in 0..24 {
        assert!(game.draw_stock().unwrap());
    }
    let waste_order: Vec<_> = game.waste().cards().iter().map(|c| c.id()).collect();
    assert_eq!(waste_order, stock_order);

    assert!(game.draw_stock().unwrap());
    assert!(game.waste().is_empty());
    assert_eq!(game.stock().len(), 24);
    assert_eq!(game.stock().top().unwrap().id(), stock_order[0]);
}

/// Draw-three turns three cards at a time.
#[test]
fn test_draw_three() {
    init_logging();
    let config = KlondikeConfig::default().with_draw_count(3);
    let mut game = KlondikeGame::new(config, 17).unwrap();

    assert!(game.draw_stock().unwrap());
    assert_eq!(game.waste().len(), 3);
    assert_eq!(game.stock().len(), 21);
    assert!(game.waste().cards().iter().all(|c| c.face_up));
}

/// The waste top can be played to the tableau; the waste is never a target.
#[test]
fn test_waste_to_tableau() {
    init_logging();
    let mut game = klondike_with(vec![
        vec![card(Suit::Hearts, 13, true)],
        vec![card(Suit::Clubs, 13, true)],
    ]);
    // Canonical stock order leaves the Queen of Clubs on top.
    assert_eq!(game.stock().top().unwrap().to_string(), "Q♣");
    assert!(game.draw_stock().unwrap());

    assert!(!game.move_cards(PileRef::Tableau(0), 1, PileRef::Waste).unwrap());
    assert!(game.move_cards(PileRef::Waste, 1, PileRef::Tableau(0)).unwrap());
    assert_eq!(game.tableaux()[0].len(), 2);
}
