//! Rules engines: pure move-legality predicates per variant.
//!
//! Each variant implements `RulesEngine` to define:
//! - What counts as a movable run
//! - Which piles accept a run
//! - When the stock may be dealt
//! - Win conditions
//!
//! Rules never mutate state. The game engines in `games` ask them before
//! every change.

pub mod engine;
pub mod klondike;
pub mod spider;

pub use engine::RulesEngine;
pub use klondike::KlondikeRules;
pub use spider::SpiderRules;
