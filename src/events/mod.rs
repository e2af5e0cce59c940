//! Notifications pushed to the host.
//!
//! The engines never depend on a presentation layer. Instead a host
//! registers one or more `EventSink`s and the engine calls them
//! synchronously after every successful mutation, before the command
//! returns, so a HUD subscribed here never disagrees with the engine.
//!
//! ## Firing Order
//!
//! After a successful command:
//! 1. `on_move()`
//! 2. `on_score(delta)` if the score changed
//! 3. `on_win()` if the game has just become won
//!
//! `new_game` fires `on_reset()` only.

mod sink;

pub use sink::{EngineEvent, EventBus, EventLog, EventSink};
