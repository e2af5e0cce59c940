//! Rules engine trait.
//!
//! Variants implement `RulesEngine` to define their rules:
//! - What sequences of cards move together
//! - Where a run may be placed
//! - Whether the stock can be dealt
//! - Win conditions

use crate::core::card::Card;
use crate::core::config::Variant;
use crate::core::pile::Pile;

/// Rules engine trait.
///
/// All methods are side-effect free. The game engines call them before
/// mutating anything, so an illegal request never changes state.
///
/// ## Implementation Notes
///
/// - `is_valid_run`: Only checks the run itself, never the destination
/// - `accepts_run`: Only checks the destination against the run's head
/// - `can_move_run`: Default combines the two; rarely needs overriding
pub trait RulesEngine {
    /// The variant these rules govern.
    fn variant(&self) -> Variant;

    /// Can `run` (bottom to top) move as a single block?
    ///
    /// Face-down cards never form part of a movable run.
    fn is_valid_run(&self, run: &[Card]) -> bool;

    /// Can a run whose bottom card is `head` be placed on `destination`?
    fn accepts_run(&self, head: &Card, destination: &Pile) -> bool;

    /// Can the stock be dealt given the current tableaux?
    fn can_deal(&self, tableaux: &[Pile], stock: &Pile) -> bool;

    /// Has the player won?
    fn is_win(&self, foundations: &[Pile]) -> bool;

    // === Convenience Methods ===

    /// Can the top `count` cards of `source` move onto `destination`?
    fn can_move_run(&self, source: &Pile, count: usize, destination: &Pile) -> bool {
        if count == 0 {
            return false;
        }
        match source.top_run(count) {
            Some(run) => self.is_valid_run(run) && self.accepts_run(&run[0], destination),
            None => false,
        }
    }

    /// Length of the longest valid run at the top of `source`.
    ///
    /// Returns 0 for an empty pile or a face-down top card.
    fn longest_run(&self, source: &Pile) -> usize {
        let mut len = 0;
        while len < source.len() {
            match source.top_run(len + 1) {
                Some(run) if self.is_valid_run(run) => len += 1,
                _ => break,
            }
        }
        len
    }
}
