//! # solitaire-engine
//!
//! Rules and state engine for Klondike and Spider solitaire.
//!
//! ## Design Principles
//!
//! 1. **Check Then Act**: Every command asks the variant's `RulesEngine`
//!    first. An illegal request returns `Ok(false)` and changes nothing.
//!
//! 2. **Exact Undo**: Each mutation is logged as a `Move` holding enough to
//!    invert it, down to every card's face-up flag.
//!
//! 3. **Deterministic Deals**: Games are dealt from an explicit seed. Hosts
//!    wanting a fresh game supply entropy via `GameRng::entropy_seed()`.
//!
//! ## Architecture
//!
//! - **Rule violations vs. contract violations**: `Ok(false)` means the move
//!   isn't allowed; `Err(EngineError)` means the caller asked for something
//!   impossible, such as a column index outside the layout.
//!
//! - **Derived effects**: Auto-reveal, Spider run extraction and the win
//!   check run after every successful command, inside the same call.
//!
//! - **Push notifications**: Hosts register `EventSink`s and are told about
//!   moves, score changes, wins and resets before each command returns.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, decks, move records, state, RNG, configuration
//! - `rules`: `RulesEngine` trait and the Klondike/Spider rules
//! - `events`: Notification sinks
//! - `games`: Per-variant game engines and the `Solitaire` trait

pub mod core;
pub mod events;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Rank, Suit,
    Pile, PileRef, PileRole, Run,
    Move, GameState,
    GameRng,
    KlondikeConfig, SpiderConfig, SuitMode, Variant,
    EngineError, Result,
};

pub use crate::rules::{KlondikeRules, RulesEngine, SpiderRules};

pub use crate::events::{EngineEvent, EventBus, EventLog, EventSink};

pub use crate::games::{KlondikeGame, Solitaire, SpiderGame};
