//! Session state: piles, undo log and counters.
//!
//! ## GameState
//!
//! One `GameState` holds a complete solitaire layout:
//! - Tableau columns and foundation piles
//! - Stock and waste (the waste stays empty in Spider)
//! - The undo log, move counter and score
//!
//! The engines mutate it only through the primitives below, which move cards
//! between piles and invert recorded moves. Rule checks happen before any
//! of these are called; the primitives themselves only guard against
//! physically impossible requests.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::error::{EngineError, Result};
use super::moves::{Move, Row};
use super::pile::{Pile, PileRef, PileRole, Run};

/// Complete state of one solitaire session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    tableaux: Vec<Pile>,
    foundations: Vec<Pile>,
    stock: Pile,
    waste: Pile,

    /// Undo log; the most recent record is last.
    undo_log: Vec<Move>,

    move_count: u32,
    score: i32,

    /// Number of cards in the deck this layout was dealt from.
    deck_size: usize,
}

impl GameState {
    /// Create an empty layout with the given number of columns.
    #[must_use]
    pub fn new(tableau_count: usize, foundation_count: usize, deck_size: usize, score: i32) -> Self {
        Self {
            tableaux: vec![Pile::new(PileRole::Tableau); tableau_count],
            foundations: vec![Pile::new(PileRole::Foundation); foundation_count],
            stock: Pile::new(PileRole::Stock),
            waste: Pile::new(PileRole::Waste),
            undo_log: Vec::new(),
            move_count: 0,
            score,
            deck_size,
        }
    }

    /// Build a state from explicit piles, e.g. to restore a position.
    ///
    /// Piles are taken as given; call [`check_conservation`] to audit them.
    ///
    /// [`check_conservation`]: GameState::check_conservation
    #[must_use]
    pub fn from_layout(
        tableaux: Vec<Pile>,
        foundations: Vec<Pile>,
        stock: Pile,
        waste: Pile,
        deck_size: usize,
        score: i32,
    ) -> Self {
        Self {
            tableaux,
            foundations,
            stock,
            waste,
            undo_log: Vec::new(),
            move_count: 0,
            score,
            deck_size,
        }
    }

    // === Read-only views ===

    #[must_use]
    pub fn tableaux(&self) -> &[Pile] {
        &self.tableaux
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Recorded moves, oldest first.
    #[must_use]
    pub fn undo_log(&self) -> &[Move] {
        &self.undo_log
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Look up a pile by address.
    pub fn pile(&self, pile: PileRef) -> Result<&Pile> {
        match pile {
            PileRef::Tableau(i) => self.tableaux.get(i).ok_or(EngineError::PileIndexOutOfRange {
                role: PileRole::Tableau,
                index: i,
                len: self.tableaux.len(),
            }),
            PileRef::Foundation(i) => {
                self.foundations
                    .get(i)
                    .ok_or(EngineError::PileIndexOutOfRange {
                        role: PileRole::Foundation,
                        index: i,
                        len: self.foundations.len(),
                    })
            }
            PileRef::Stock => Ok(&self.stock),
            PileRef::Waste => Ok(&self.waste),
        }
    }

    pub(crate) fn pile_mut(&mut self, pile: PileRef) -> Result<&mut Pile> {
        let tableau_len = self.tableaux.len();
        let foundation_len = self.foundations.len();
        match pile {
            PileRef::Tableau(i) => self.tableaux.get_mut(i).ok_or(EngineError::PileIndexOutOfRange {
                role: PileRole::Tableau,
                index: i,
                len: tableau_len,
            }),
            PileRef::Foundation(i) => {
                self.foundations
                    .get_mut(i)
                    .ok_or(EngineError::PileIndexOutOfRange {
                        role: PileRole::Foundation,
                        index: i,
                        len: foundation_len,
                    })
            }
            PileRef::Stock => Ok(&mut self.stock),
            PileRef::Waste => Ok(&mut self.waste),
        }
    }

    /// Every card in the layout, stock first.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.tableaux.iter().flat_map(|p| p.cards().iter()))
            .chain(self.foundations.iter().flat_map(|p| p.cards().iter()))
    }

    /// Total number of cards sitting on foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Verify every card of the deck appears exactly once.
    pub fn check_conservation(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for card in self.all_cards() {
            let id = card.id();
            if id.raw() as usize >= self.deck_size {
                return Err(EngineError::ConservationViolated(format!(
                    "card id {} outside a {}-card deck",
                    id.raw(),
                    self.deck_size
                )));
            }
            if !seen.insert(id) {
                return Err(EngineError::ConservationViolated(format!(
                    "card {card} (id {}) appears twice",
                    id.raw()
                )));
            }
        }
        if seen.len() != self.deck_size {
            return Err(EngineError::ConservationViolated(format!(
                "{} of {} cards present",
                seen.len(),
                self.deck_size
            )));
        }
        Ok(())
    }

    // === Counters and log ===

    pub(crate) fn record(&mut self, mv: Move) {
        self.undo_log.push(mv);
    }

    pub(crate) fn pop_record(&mut self) -> Option<Move> {
        self.undo_log.pop()
    }

    pub(crate) fn count_move(&mut self, score_delta: i32) {
        self.move_count = self.move_count.saturating_add(1);
        self.score = self.score.saturating_add(score_delta);
    }

    pub(crate) fn uncount_move(&mut self, score_delta: i32) {
        self.move_count = self.move_count.saturating_sub(1);
        self.score = self.score.saturating_sub(score_delta);
    }

    // === Forward primitives ===

    /// Place `cards` as the initial content of a pile.
    pub(crate) fn deal_into(&mut self, pile: PileRef, cards: &[Card]) -> Result<()> {
        self.pile_mut(pile)?.add_run(cards);
        Ok(())
    }

    /// Move the top `count` cards of `from` onto `to`.
    ///
    /// Turns the source's new top card face-up if it is a tableau column.
    /// Returns the moved cards and whether a card was revealed.
    pub(crate) fn transfer_run(
        &mut self,
        from: PileRef,
        count: usize,
        to: PileRef,
    ) -> Result<(Run, bool)> {
        // Resolve the destination first so a bad index can't strand cards.
        self.pile(to)?;
        let source = self.pile_mut(from)?;
        let run = source.take_top(count)?;
        let revealed = source.role() == PileRole::Tableau && source.flip_top_if_needed();
        self.pile_mut(to)?.add_run(&run);
        Ok((run, revealed))
    }

    /// Deal one stock card face-up onto every tableau column.
    pub(crate) fn deal_row(&mut self) -> Result<Row> {
        let columns = self.tableaux.len();
        let mut row = self.stock.take_top(columns)?;
        // Stock top goes to column 0.
        row.reverse();
        let mut dealt = Row::new();
        for (column, mut card) in self.tableaux.iter_mut().zip(row) {
            card.face_up = true;
            column.push(card);
            dealt.push(card);
        }
        Ok(dealt)
    }

    /// Turn up to `n` stock cards onto the waste.
    pub(crate) fn draw_to_waste(&mut self, n: usize) -> SmallVec<[Card; 3]> {
        let mut drawn = SmallVec::new();
        for _ in 0..n {
            let Some(mut card) = self.stock.pop() else {
                break;
            };
            card.face_up = true;
            self.waste.push(card);
            drawn.push(card);
        }
        drawn
    }

    /// Turn the whole waste back over into the stock, face-down.
    pub(crate) fn recycle_waste(&mut self) -> usize {
        let mut count = 0;
        while let Some(mut card) = self.waste.pop() {
            card.face_up = false;
            self.stock.push(card);
            count += 1;
        }
        count
    }

    /// Lift the top 13 cards of a column onto an empty foundation.
    pub(crate) fn extract_run(&mut self, from_tableau: usize, foundation: usize) -> Result<Move> {
        self.pile(PileRef::Foundation(foundation))?;
        let (cards, revealed_underlying) = self.transfer_run(
            PileRef::Tableau(from_tableau),
            13,
            PileRef::Foundation(foundation),
        )?;
        Ok(Move::ExtractRun {
            from_tableau,
            foundation,
            cards,
            revealed_underlying,
        })
    }

    // === Inversion ===

    /// Undo the pile changes of one record. Counters are left to the caller.
    pub(crate) fn revert(&mut self, mv: &Move) -> Result<()> {
        match mv {
            Move::MoveRun {
                from,
                to,
                count,
                revealed_underlying,
                ..
            } => {
                self.pile(*from)?;
                let run = self.pile_mut(*to)?.take_top(*count)?;
                let source = self.pile_mut(*from)?;
                source.add_run(&run);
                source.flip_top_if_needed();
                if *revealed_underlying {
                    hide_below_run(source, *count);
                }
            }
            Move::DealRow { cards, .. } => {
                for column in (0..cards.len()).rev() {
                    let mut taken = self.pile_mut(PileRef::Tableau(column))?.take_top(1)?;
                    for card in taken.iter_mut() {
                        card.face_up = false;
                        self.stock.push(*card);
                    }
                }
            }
            Move::ExtractRun {
                from_tableau,
                foundation,
                cards,
                revealed_underlying,
            } => {
                let column = PileRef::Tableau(*from_tableau);
                self.pile(column)?;
                let run = self
                    .pile_mut(PileRef::Foundation(*foundation))?
                    .take_top(cards.len())?;
                let tableau = self.pile_mut(column)?;
                if *revealed_underlying {
                    hide_below_run(tableau, 0);
                }
                tableau.add_run(&run);
                tableau.flip_top_if_needed();
            }
            Move::Draw { cards } => {
                let taken = self.waste.take_top(cards.len())?;
                for card in taken.iter().rev() {
                    let mut card = *card;
                    card.face_up = false;
                    self.stock.push(card);
                }
            }
            Move::Recycle { count } => {
                let taken = self.stock.take_top(*count)?;
                for card in taken.iter().rev() {
                    let mut card = *card;
                    card.face_up = true;
                    self.waste.push(card);
                }
            }
        }
        Ok(())
    }
}

/// Turn face-down the card sitting directly beneath the top `count` cards.
fn hide_below_run(pile: &mut Pile, count: usize) {
    if let Some(index) = pile.len().checked_sub(count + 1) {
        if let Some(card) = pile.get_mut(index) {
            card.face_up = false;
        }
    }
}
