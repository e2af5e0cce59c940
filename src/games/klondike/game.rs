//! Klondike game engine.

use tracing::{debug, trace};

use crate::core::card::Card;
use crate::core::config::{KlondikeConfig, Variant};
use crate::core::deck;
use crate::core::error::Result;
use crate::core::moves::Move;
use crate::core::pile::{Pile, PileRef, PileRole};
use crate::core::state::GameState;
use crate::events::EventSink;
use crate::games::session::{check_layout, Session};
use crate::games::Solitaire;
use crate::rules::klondike::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::rules::{KlondikeRules, RulesEngine};

/// Klondike never changes the score.
const SCORE_DELTA: i32 = 0;

/// One Klondike session.
pub struct KlondikeGame {
    config: KlondikeConfig,
    session: Session<KlondikeRules>,
}

impl KlondikeGame {
    /// Deal a new game from `seed`.
    pub fn new(config: KlondikeConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let state = deal(&config, seed);
        debug!(variant = %Variant::Klondike, seed, draw_count = config.draw_count, "new game dealt");
        Ok(Self {
            config,
            session: Session::new(KlondikeRules::new(), state, seed),
        })
    }

    /// Resume play from an existing position.
    ///
    /// The layout must have seven columns, four foundations and all 52 cards
    /// exactly once. The reported seed is 0.
    pub fn from_state(config: KlondikeConfig, state: GameState) -> Result<Self> {
        config.validate()?;
        check_layout(
            &state,
            TABLEAU_COUNT,
            FOUNDATION_COUNT,
            Variant::Klondike.deck_size(),
        )?;
        Ok(Self {
            config,
            session: Session::new(KlondikeRules::new(), state, 0),
        })
    }

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    /// Move the top `count` cards of `from` onto `to`.
    ///
    /// Legal combinations:
    /// - tableau to tableau, any valid run
    /// - tableau or waste to foundation, one card
    /// - waste or foundation to tableau, one card
    ///
    /// The stock is never a source or destination and the waste never
    /// receives cards this way.
    pub fn move_cards(&mut self, from: PileRef, count: usize, to: PileRef) -> Result<bool> {
        let state = &self.session.state;
        let source = state.pile(from)?;
        let destination = state.pile(to)?;
        let rules = &self.session.rules;

        let legal = from != to
            && match (from, to) {
                (PileRef::Tableau(_), PileRef::Tableau(_)) => {
                    rules.can_move_run(source, count, destination)
                }
                (PileRef::Tableau(_) | PileRef::Waste, PileRef::Foundation(_)) => {
                    count == 1
                        && source
                            .top()
                            .is_some_and(|card| rules.accepts_on_foundation(card, destination))
                }
                (PileRef::Waste | PileRef::Foundation(_), PileRef::Tableau(_)) => {
                    count == 1 && rules.can_move_run(source, 1, destination)
                }
                _ => false,
            };
        if !legal {
            trace!(%from, count, %to, "rejected illegal move");
            return Ok(false);
        }

        let (cards, revealed_underlying) = self.session.state.transfer_run(from, count, to)?;
        self.session.record(Move::MoveRun {
            from,
            to,
            count,
            cards,
            revealed_underlying,
            score_delta: SCORE_DELTA,
        });
        debug!(
            %from,
            %to,
            count,
            revealed_underlying,
            moves = self.session.state.move_count(),
            "moved cards"
        );

        self.session.finish_command(SCORE_DELTA);
        Ok(true)
    }

    /// Move a run between two tableau columns.
    pub fn move_run(&mut self, from: usize, count: usize, to: usize) -> Result<bool> {
        self.move_cards(PileRef::Tableau(from), count, PileRef::Tableau(to))
    }

    /// Move the top card of `from` onto foundation `foundation`.
    pub fn move_to_foundation(&mut self, from: PileRef, foundation: usize) -> Result<bool> {
        self.move_cards(from, 1, PileRef::Foundation(foundation))
    }

    /// Move the top card of `from` onto whichever foundation accepts it.
    pub fn move_to_any_foundation(&mut self, from: PileRef) -> Result<bool> {
        let state = &self.session.state;
        let Some(card) = state.pile(from)?.top() else {
            return Ok(false);
        };
        let target = state
            .foundations()
            .iter()
            .position(|f| self.session.rules.accepts_on_foundation(card, f));

        match target {
            Some(foundation) => self.move_to_foundation(from, foundation),
            None => {
                trace!(%from, %card, "no foundation accepts card");
                Ok(false)
            }
        }
    }

    /// Turn cards from the stock onto the waste, or recycle the waste once
    /// the stock is empty.
    pub fn draw_stock(&mut self) -> Result<bool> {
        let state = &self.session.state;
        let rules = &self.session.rules;

        if rules.can_deal(state.tableaux(), state.stock()) {
            let cards = self
                .session
                .state
                .draw_to_waste(usize::from(self.config.draw_count));
            debug!(drawn = cards.len(), stock = self.session.state.stock().len(), "drew from stock");
            self.session.record(Move::Draw { cards });
        } else if rules.can_recycle(state.stock(), state.waste()) {
            let count = self.session.state.recycle_waste();
            debug!(count, "recycled waste");
            self.session.record(Move::Recycle { count });
        } else {
            trace!("stock and waste both empty");
            return Ok(false);
        }

        self.session.finish_command(SCORE_DELTA);
        Ok(true)
    }

    /// True once every remaining card is face-up on the tableau, so the game
    /// can be finished by foundation moves alone.
    #[must_use]
    pub fn can_auto_complete(&self) -> bool {
        let state = &self.session.state;
        state.stock().is_empty()
            && state.waste().is_empty()
            && state
                .tableaux()
                .iter()
                .all(|column| column.cards().iter().all(|c| c.face_up))
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        self.session.state.waste()
    }
}

impl Solitaire for KlondikeGame {
    type Rules = KlondikeRules;

    fn rules(&self) -> &KlondikeRules {
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

/// Column `c` gets `c + 1` cards with only the last face-up; the rest go
/// to the stock.
fn deal(config: &KlondikeConfig, seed: u64) -> GameState {
    let mut cards = deck::shuffle(deck::new_deck(Variant::Klondike), seed).into_iter();

    let tableaux: Vec<Pile> = (0..TABLEAU_COUNT)
        .map(|column| {
            let mut dealt: Vec<Card> = cards.by_ref().take(column + 1).collect();
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
        Variant::Klondike.deck_size(),
        config.starting_score,
    )
}
