//! Spider game engine.

use tracing::{debug, trace, warn};

use crate::core::card::Card;
use crate::core::config::{SpiderConfig, Variant, SPIDER_DEAL_SCORE, SPIDER_MOVE_SCORE};
use crate::core::deck;
use crate::core::error::Result;
use crate::core::moves::Move;
use crate::core::pile::{Pile, PileRef, PileRole};
use crate::core::state::GameState;
use crate::events::EventSink;
use crate::games::session::{check_layout, Session};
use crate::games::Solitaire;
use crate::rules::spider::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::rules::{RulesEngine, SpiderRules};

/// Columns dealt six cards; the rest get five.
const TALL_COLUMNS: usize = 4;
const TALL_HEIGHT: usize = 6;
const SHORT_HEIGHT: usize = 5;

/// One Spider session.
pub struct SpiderGame {
    config: SpiderConfig,
    session: Session<SpiderRules>,
}

impl SpiderGame {
    /// Deal a new game from `seed`.
    pub fn new(config: SpiderConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let rules = SpiderRules::new(config.suit_mode);
        let state = deal(&config, seed);
        debug!(variant = %rules.variant(), seed, "new game dealt");
        Ok(Self {
            config,
            session: Session::new(rules, state, seed),
        })
    }

    /// Resume play from an existing position.
    ///
    /// The layout must have ten columns, eight foundations and every card of
    /// the configured deck exactly once. The reported seed is 0.
    pub fn from_state(config: SpiderConfig, state: GameState) -> Result<Self> {
        config.validate()?;
        let variant = Variant::Spider(config.suit_mode);
        check_layout(&state, TABLEAU_COUNT, FOUNDATION_COUNT, variant.deck_size())?;
        Ok(Self {
            session: Session::new(SpiderRules::new(config.suit_mode), state, 0),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SpiderConfig {
        &self.config
    }

    /// Move the top `count` cards of column `from` onto column `to`.
    ///
    /// Returns `Ok(false)` without touching the state when the move is
    /// illegal, and `Err` only for a column index outside the layout.
    pub fn move_run(&mut self, from: usize, count: usize, to: usize) -> Result<bool> {
        let (source, destination) = (PileRef::Tableau(from), PileRef::Tableau(to));
        let state = &self.session.state;
        let source_pile = state.pile(source)?;
        let destination_pile = state.pile(destination)?;

        if from == to {
            trace!(from, "rejected move onto its own column");
            return Ok(false);
        }
        if !self
            .session
            .rules
            .can_move_run(source_pile, count, destination_pile)
        {
            trace!(from, count, to, "rejected illegal run move");
            return Ok(false);
        }

        let (cards, revealed_underlying) = self.session.state.transfer_run(source, count, destination)?;
        self.session.record(Move::MoveRun {
            from: source,
            to: destination,
            count,
            cards,
            revealed_underlying,
            score_delta: SPIDER_MOVE_SCORE,
        });
        debug!(
            from,
            to,
            count,
            revealed_underlying,
            score = self.session.state.score(),
            moves = self.session.state.move_count(),
            "moved run"
        );

        self.extract_completed_runs()?;
        self.session.finish_command(SPIDER_MOVE_SCORE);
        Ok(true)
    }

    /// Move the longest legal run from column `from` onto column `to`.
    ///
    /// Tries the longest movable run at the top of `from` first, then
    /// shorter ones, and applies the first that fits.
    pub fn move_longest_run(&mut self, from: usize, to: usize) -> Result<bool> {
        let longest = self
            .session
            .rules
            .longest_run(self.session.state.pile(PileRef::Tableau(from))?);
        self.session.state.pile(PileRef::Tableau(to))?;

        for count in (1..=longest).rev() {
            if self.move_run(from, count, to)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Deal one face-up stock card onto every column.
    ///
    /// Blocked while any column is empty or the stock can't cover a row.
    pub fn deal_row(&mut self) -> Result<bool> {
        let state = &self.session.state;
        if !self.session.rules.can_deal(state.tableaux(), state.stock()) {
            trace!(
                empty_columns = state.tableaux().iter().filter(|p| p.is_empty()).count(),
                stock = state.stock().len(),
                "deal blocked"
            );
            return Ok(false);
        }

        let cards = self.session.state.deal_row()?;
        self.session.record(Move::DealRow {
            cards,
            score_delta: SPIDER_DEAL_SCORE,
        });
        debug!(
            stock = self.session.state.stock().len(),
            score = self.session.state.score(),
            moves = self.session.state.move_count(),
            "dealt row"
        );

        self.extract_completed_runs()?;
        self.session.finish_command(SPIDER_DEAL_SCORE);
        Ok(true)
    }

    /// Number of full rows left in the stock.
    #[must_use]
    pub fn stock_deals_remaining(&self) -> usize {
        let columns = self.session.state.tableaux().len();
        if columns == 0 {
            return 0;
        }
        self.session.state.stock().len() / columns
    }

    /// Lift every completed King-to-Ace run onto the first empty foundation.
    ///
    /// Re-evaluated until no column is topped by a completed run, since an
    /// extraction can uncover another one.
    fn extract_completed_runs(&mut self) -> Result<()> {
        loop {
            let completed = self.session.rules.completed_columns(self.session.state.tableaux());
            let Some(&column) = completed.first() else {
                return Ok(());
            };
            let Some(foundation) = self
                .session
                .state
                .foundations()
                .iter()
                .position(Pile::is_empty)
            else {
                warn!(column, "completed run but no empty foundation");
                return Ok(());
            };

            let mv = self.session.state.extract_run(column, foundation)?;
            debug!(column, foundation, "extracted completed run");
            self.session.record(mv);
        }
    }
}

impl Solitaire for SpiderGame {
    type Rules = SpiderRules;

    fn rules(&self) -> &SpiderRules {
        &self.session.rules
    }

    fn state(&self) -> &GameState {
        &self.session.state
    }

    fn seed(&self) -> u64 {
        self.session.seed()
    }

    fn new_game(&mut self, seed: u64) {
        let state = deal(&self.config, seed);
        self.session.reset(state, seed);
    }

    fn undo(&mut self) -> Result<bool> {
        self.session.undo()
    }

    fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.session.subscribe(sink);
    }
}

/// Shuffle a fresh deck and lay out the opening position.
fn deal(config: &SpiderConfig, seed: u64) -> GameState {
    let variant = Variant::Spider(config.suit_mode);
    let mut cards = deck::shuffle(deck::new_deck(variant), seed).into_iter();

    let tableaux: Vec<Pile> = (0..TABLEAU_COUNT)
        .map(|column| {
            let height = if column < TALL_COLUMNS {
                TALL_HEIGHT
            } else {
                SHORT_HEIGHT
            };
            let mut dealt: Vec<Card> = cards.by_ref().take(height).collect();
            if let Some(top) = dealt.last_mut() {
                top.face_up = true;
            }
            Pile::with_cards(PileRole::Tableau, dealt)
        })
        .collect();
    let stock = Pile::with_cards(PileRole::Stock, cards.collect());

    GameState::from_layout(
        tableaux,
        vec![Pile::new(PileRole::Foundation); FOUNDATION_COUNT],
        stock,
        Pile::new(PileRole::Waste),
        variant.deck_size(),
        config.starting_score,
    )
}
