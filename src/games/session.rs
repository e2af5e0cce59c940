//! Variant-independent session plumbing: logging moves, undo, win
//! tracking and notifications.

use tracing::{debug, info, warn};

use crate::core::error::{EngineError, Result};
use crate::core::moves::Move;
use crate::core::state::GameState;
use crate::events::{EngineEvent, EventBus, EventSink};
use crate::rules::RulesEngine;

pub(crate) struct Session<R> {
    pub(crate) rules: R,
    pub(crate) state: GameState,
    events: EventBus,
    seed: u64,
    /// Set once the win notification has fired for the current position.
    won: bool,
}

impl<R: RulesEngine> Session<R> {
    pub(crate) fn new(rules: R, state: GameState, seed: u64) -> Self {
        let won = rules.is_win(state.foundations());
        Self {
            rules,
            state,
            events: EventBus::new(),
            seed,
            won,
        }
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.events.subscribe(sink);
        debug!(sinks = self.events.sink_count(), "event sink subscribed");
    }

    /// Replace the state with a fresh deal.
    pub(crate) fn reset(&mut self, state: GameState, seed: u64) {
        self.state = state;
        self.seed = seed;
        self.won = self.rules.is_win(self.state.foundations());
        debug!(variant = %self.rules.variant(), seed, "new game dealt");
        self.audit();
        self.events.emit(EngineEvent::Reset);
    }

    /// Log a record, counting it as a move if the player issued it.
    pub(crate) fn record(&mut self, mv: Move) {
        if mv.is_player_action() {
            self.state.count_move(mv.score_delta());
        }
        self.state.record(mv);
    }

    /// Run the win check and notify sinks after a successful command.
    pub(crate) fn finish_command(&mut self, score_delta: i32) {
        let became_won = !self.won && self.rules.is_win(self.state.foundations());
        if became_won {
            self.won = true;
            info!(
                variant = %self.rules.variant(),
                moves = self.state.move_count(),
                score = self.state.score(),
                "game won"
            );
        }
        self.audit();
        self.events.command_applied(score_delta, became_won);
    }

    /// Revert the last player command together with any run extractions it
    /// triggered.
    pub(crate) fn undo(&mut self) -> Result<bool> {
        if self.state.undo_log().is_empty() {
            return Ok(false);
        }

        let mut score_delta = 0;
        while let Some(mv) = self.state.pop_record() {
            self.revert(mv.clone())?;
            if mv.is_player_action() {
                score_delta = mv.score_delta();
                self.state.uncount_move(score_delta);
                debug!(?mv, score = self.state.score(), "undid move");
                break;
            }
            debug!(?mv, "undid run extraction");
        }

        self.won = self.rules.is_win(self.state.foundations());
        self.audit();
        self.events.emit(EngineEvent::Move);
        if score_delta != 0 {
            self.events.emit(EngineEvent::Score(-score_delta));
        }
        Ok(true)
    }

    fn revert(&mut self, mv: Move) -> Result<()> {
        if let Err(err) = self.state.revert(&mv) {
            warn!(?mv, %err, "undo record could not be inverted");
            self.state.record(mv);
            return Err(err);
        }
        Ok(())
    }

    fn audit(&self) {
        debug_assert!(
            self.state.check_conservation().is_ok(),
            "{:?}",
            self.state.check_conservation()
        );
    }
}

/// Reject a restored layout whose shape doesn't match the variant.
pub(crate) fn check_layout(
    state: &GameState,
    tableau_count: usize,
    foundation_count: usize,
    deck_size: usize,
) -> Result<()> {
    if state.tableaux().len() != tableau_count
        || state.foundations().len() != foundation_count
        || state.deck_size() != deck_size
    {
        return Err(EngineError::InvalidConfig(format!(
            "expected {tableau_count} tableaux, {foundation_count} foundations and {deck_size} cards, \
             got {}, {} and {}",
            state.tableaux().len(),
            state.foundations().len(),
            state.deck_size()
        )));
    }
    state.check_conservation()
}
