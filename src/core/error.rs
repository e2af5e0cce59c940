//! Contract violations.
//!
//! Illegal moves are *not* errors: engine commands report them as
//! `Ok(false)` and leave the state untouched. `EngineError` is reserved for
//! calls the host should never make (bad ranks, bad pile indices, taking more
//! cards than a pile holds) so the two can never be confused.

use thiserror::Error;

use super::pile::PileRole;

/// A programming-contract violation surfaced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A card was constructed with a rank outside `1..=13`.
    #[error("rank {0} is outside 1..=13")]
    InvalidRank(u8),

    /// A pile index does not exist in the current layout.
    #[error("{role} index {index} out of range (layout has {len})")]
    PileIndexOutOfRange {
        role: PileRole,
        index: usize,
        len: usize,
    },

    /// More cards were requested from a pile than it holds.
    #[error("cannot take {requested} cards from a pile of {available}")]
    InsufficientCards { requested: usize, available: usize },

    /// A configuration value is not supported.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cards were duplicated or lost across the piles of a session.
    #[error("card conservation violated: {0}")]
    ConservationViolated(String),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
