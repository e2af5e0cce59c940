//! Spider rules.
//!
//! Only same-suit runs descending by one move as a block, but any card may
//! be placed on a card one rank higher regardless of suit. The stock deals
//! a full row and may not be dealt while a column is empty. Completed
//! King-to-Ace runs leave the tableau for the foundations; eight of them
//! win the game.

use smallvec::SmallVec;

use crate::core::card::{Card, Rank};
use crate::core::config::{SuitMode, Variant};
use crate::core::pile::Pile;

use super::engine::RulesEngine;

/// Number of tableau columns in Spider.
pub const TABLEAU_COUNT: usize = 10;
/// Number of foundation piles, one per completed run.
pub const FOUNDATION_COUNT: usize = 8;
/// Length of a completed run.
pub const RUN_LENGTH: usize = 13;

/// Spider move legality, parameterized by suit mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpiderRules {
    suit_mode: SuitMode,
}

impl SpiderRules {
    #[must_use]
    pub fn new(suit_mode: SuitMode) -> Self {
        Self { suit_mode }
    }

    #[must_use]
    pub fn suit_mode(&self) -> SuitMode {
        self.suit_mode
    }

    /// Are the top 13 cards of `pile` a face-up, same-suit King-to-Ace run?
    #[must_use]
    pub fn is_completed_run(&self, pile: &Pile) -> bool {
        match pile.top_run(RUN_LENGTH) {
            Some(run) => run[0].rank() == Rank::KING && self.is_valid_run(run),
            None => false,
        }
    }

    /// Indices of every column currently topped by a completed run.
    #[must_use]
    pub fn completed_columns(&self, tableaux: &[Pile]) -> SmallVec<[usize; TABLEAU_COUNT]> {
        tableaux
            .iter()
            .enumerate()
            .filter(|(_, pile)| self.is_completed_run(pile))
            .map(|(i, _)| i)
            .collect()
    }
}

impl RulesEngine for SpiderRules {
    fn variant(&self) -> Variant {
        Variant::Spider(self.suit_mode)
    }

    fn is_valid_run(&self, run: &[Card]) -> bool {
        run.iter().all(|c| c.face_up)
            && run
                .windows(2)
                .all(|pair| pair[1].is_one_below_same_suit(&pair[0]))
    }

    fn accepts_run(&self, head: &Card, destination: &Pile) -> bool {
        match destination.top() {
            None => true,
            Some(top) => top.face_up && head.is_one_below(top),
        }
    }

    /// Dealing needs every column occupied and a full row left in the stock.
    fn can_deal(&self, tableaux: &[Pile], stock: &Pile) -> bool {
        tableaux.iter().all(|p| !p.is_empty()) && stock.len() >= tableaux.len()
    }

    fn is_win(&self, foundations: &[Pile]) -> bool {
        foundations.iter().map(Pile::len).sum::<usize>() == FOUNDATION_COUNT * RUN_LENGTH
    }
}
