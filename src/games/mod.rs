//! Per-variant game engines.
//!
//! Each engine owns one `GameState` and orchestrates every command the
//! same way: validate through its `RulesEngine`, mutate the piles, record
//! an undoable `Move`, run derived effects (auto-reveal, run extraction,
//! win check) and finally notify subscribed sinks.
//!
//! Engines are single-threaded. A host that shares one across threads must
//! serialize access itself (e.g. behind a `Mutex`).

mod session;

pub mod klondike;
pub mod spider;

pub use klondike::KlondikeGame;
pub use spider::SpiderGame;

use crate::core::error::Result;
use crate::core::pile::Pile;
use crate::core::state::GameState;
use crate::events::EventSink;
use crate::rules::RulesEngine;

/// Operations shared by every solitaire engine.
pub trait Solitaire {
    /// The variant's rules.
    type Rules: RulesEngine;

    fn rules(&self) -> &Self::Rules;

    /// Read-only view of the whole session.
    fn state(&self) -> &GameState;

    /// Seed of the current deal.
    fn seed(&self) -> u64;

    /// Discard the current game and deal a new one from `seed`.
    fn new_game(&mut self, seed: u64);

    /// Revert the most recent player command.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    fn undo(&mut self) -> Result<bool>;

    /// Register a notification sink.
    fn subscribe(&mut self, sink: Box<dyn EventSink>);

    // === Convenience Methods ===

    fn is_win(&self) -> bool {
        self.rules().is_win(self.state().foundations())
    }

    fn move_count(&self) -> u32 {
        self.state().move_count()
    }

    fn score(&self) -> i32 {
        self.state().score()
    }

    fn tableaux(&self) -> &[Pile] {
        self.state().tableaux()
    }

    fn foundations(&self) -> &[Pile] {
        self.state().foundations()
    }

    fn stock(&self) -> &Pile {
        self.state().stock()
    }
}
