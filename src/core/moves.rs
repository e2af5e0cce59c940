//! Move records: one entry per reversible state change.
//!
//! Every mutating engine command pushes a `Move` onto the session's undo
//! log. Each record carries exactly what is needed to invert it, including
//! whether the command turned over a face-down card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::pile::{PileRef, Run};

/// One card per tableau column; Spider has ten.
pub type Row = SmallVec<[Card; 10]>;

/// A recorded, reversible action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Cards moved as a block between two piles.
    MoveRun {
        from: PileRef,
        to: PileRef,
        count: usize,
        /// The moved cards, bottom to top.
        cards: Run,
        /// The source's new top card was face-down and got turned up.
        revealed_underlying: bool,
        /// Score change applied by the move.
        score_delta: i32,
    },

    /// Spider: one stock card dealt face-up onto every tableau column.
    DealRow {
        /// Dealt cards in column order.
        cards: Row,
        score_delta: i32,
    },

    /// Spider: a completed King-to-Ace run lifted off a tableau column.
    ///
    /// Derived from a player move rather than issued by the player.
    ExtractRun {
        from_tableau: usize,
        foundation: usize,
        cards: Run,
        revealed_underlying: bool,
    },

    /// Klondike: cards turned from stock onto the waste.
    Draw {
        /// Drawn cards in the order they landed on the waste.
        cards: SmallVec<[Card; 3]>,
    },

    /// Klondike: the waste turned back over to form a new stock.
    Recycle { count: usize },
}

impl Move {
    /// Score change this record applied when it was made.
    #[must_use]
    pub fn score_delta(&self) -> i32 {
        match self {
            Move::MoveRun { score_delta, .. } | Move::DealRow { score_delta, .. } => *score_delta,
            Move::ExtractRun { .. } | Move::Draw { .. } | Move::Recycle { .. } => 0,
        }
    }

    /// True for records produced by a player command.
    ///
    /// Run extraction is a side effect of another command and does not count
    /// towards the move counter.
    #[must_use]
    pub fn is_player_action(&self) -> bool {
        !matches!(self, Move::ExtractRun { .. })
    }
}
