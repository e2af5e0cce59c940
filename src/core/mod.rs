//! Core types: cards, piles, decks, move records, state, RNG, configuration.
//!
//! Everything here is variant-agnostic data. Legality lives in `rules` and
//! orchestration in `games`.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod moves;
pub mod pile;
pub mod rng;
pub mod state;

pub use card::{Card, CardId, Color, Rank, Suit};
pub use config::{KlondikeConfig, SpiderConfig, SuitMode, Variant};
pub use deck::{new_deck, shuffle};
pub use error::{EngineError, Result};
pub use moves::{Move, Row};
pub use pile::{Pile, PileRef, PileRole, Run};
pub use rng::GameRng;
pub use state::GameState;
