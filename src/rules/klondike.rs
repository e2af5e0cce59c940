//! Klondike rules.
//!
//! - Tableau: build down by one in alternating colours; only a King may
//!   start an empty column
//! - Foundation: build up by suit from the Ace
//! - Win: all four foundations hold thirteen cards

use crate::core::card::{Card, Rank};
use crate::core::config::Variant;
use crate::core::pile::Pile;

use super::engine::RulesEngine;

/// Number of tableau columns in Klondike.
pub const TABLEAU_COUNT: usize = 7;
/// Number of foundation piles in Klondike.
pub const FOUNDATION_COUNT: usize = 4;

/// Klondike move legality.
#[derive(Clone, Copy, Debug, Default)]
pub struct KlondikeRules;

impl KlondikeRules {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Can `moving` be placed on a tableau column whose top is `destination_top`?
    ///
    /// An empty column (`None`) takes only a King. Otherwise `moving` must be
    /// one rank lower and of the opposite colour.
    #[must_use]
    pub fn can_place_on_tableau(&self, moving: &Card, destination_top: Option<&Card>) -> bool {
        match destination_top {
            None => moving.rank() == Rank::KING,
            Some(top) => moving.is_one_below(top) && moving.color() != top.color(),
        }
    }

    /// Can `moving` be placed on a foundation whose top is `destination_top`?
    ///
    /// An empty foundation takes only an Ace. Otherwise `moving` must share
    /// the top card's suit and be one rank higher.
    #[must_use]
    pub fn can_place_on_foundation(&self, moving: &Card, destination_top: Option<&Card>) -> bool {
        match destination_top {
            None => moving.rank() == Rank::ACE,
            Some(top) => moving.suit() == top.suit() && top.is_one_below(moving),
        }
    }

    /// Can the face-up `card` go onto `foundation`?
    #[must_use]
    pub fn accepts_on_foundation(&self, card: &Card, foundation: &Pile) -> bool {
        card.face_up && self.can_place_on_foundation(card, foundation.top())
    }

    /// The waste can be turned back into the stock once the stock runs out.
    #[must_use]
    pub fn can_recycle(&self, stock: &Pile, waste: &Pile) -> bool {
        stock.is_empty() && !waste.is_empty()
    }
}

impl RulesEngine for KlondikeRules {
    fn variant(&self) -> Variant {
        Variant::Klondike
    }

    fn is_valid_run(&self, run: &[Card]) -> bool {
        run.iter().all(|c| c.face_up)
            && run
                .windows(2)
                .all(|pair| self.can_place_on_tableau(&pair[1], Some(&pair[0])))
    }

    fn accepts_run(&self, head: &Card, destination: &Pile) -> bool {
        match destination.top() {
            Some(top) if !top.face_up => false,
            top => self.can_place_on_tableau(head, top),
        }
    }

    fn can_deal(&self, _tableaux: &[Pile], stock: &Pile) -> bool {
        !stock.is_empty()
    }

    fn is_win(&self, foundations: &[Pile]) -> bool {
        foundations.len() == FOUNDATION_COUNT && foundations.iter().all(|f| f.len() == 13)
    }
}
