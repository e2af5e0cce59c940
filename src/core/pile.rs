//! Piles: ordered card containers.
//!
//! A `Pile` is a pure container. Index 0 is the bottom card, the last
//! index is the top. Piles never check rule legality; that is the rules
//! engine's job. They only refuse physically impossible requests, such as
//! taking more cards than they hold.
//!
//! ## Usage
//!
//! ```
//! use solitaire_engine::core::{Card, CardId, Pile, PileRole, Suit};
//!
//! let mut pile = Pile::new(PileRole::Tableau);
//! pile.push(Card::new(CardId::new(0), Suit::Spades, 9, false).unwrap());
//! pile.push(Card::new(CardId::new(1), Suit::Hearts, 8, true).unwrap());
//!
//! let run = pile.take_top(1).unwrap();
//! assert_eq!(run[0].rank().value(), 8);
//!
//! // The newly exposed card is turned over.
//! assert!(pile.flip_top_if_needed());
//! assert!(pile.top().unwrap().face_up);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::error::{EngineError, Result};

/// Inline storage for a run of cards; a full suit fits without allocating.
pub type Run = SmallVec<[Card; 13]>;

/// The part a pile plays in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRole {
    /// Column where runs are built and moved.
    Tableau,
    /// Accumulates completed, ordered cards; the win target.
    Foundation,
    /// Face-down reserve dealt from.
    Stock,
    /// Klondike cards turned from the stock.
    Waste,
}

impl std::fmt::Display for PileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PileRole::Tableau => "tableau",
            PileRole::Foundation => "foundation",
            PileRole::Stock => "stock",
            PileRole::Waste => "waste",
        };
        f.write_str(name)
    }
}

/// Address of a pile within a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileRef {
    Tableau(usize),
    Foundation(usize),
    Stock,
    Waste,
}

impl PileRef {
    /// The role of the addressed pile.
    #[must_use]
    pub const fn role(self) -> PileRole {
        match self {
            PileRef::Tableau(_) => PileRole::Tableau,
            PileRef::Foundation(_) => PileRole::Foundation,
            PileRef::Stock => PileRole::Stock,
            PileRef::Waste => PileRole::Waste,
        }
    }
}

impl std::fmt::Display for PileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileRef::Tableau(i) => write!(f, "tableau[{i}]"),
            PileRef::Foundation(i) => write!(f, "foundation[{i}]"),
            PileRef::Stock => write!(f, "stock"),
            PileRef::Waste => write!(f, "waste"),
        }
    }
}

/// An ordered stack of cards tagged with its role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    role: PileRole,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new(role: PileRole) -> Self {
        Self {
            role,
            cards: Vec::new(),
        }
    }

    /// Create a pile holding `cards`, bottom first.
    #[must_use]
    pub fn with_cards(role: PileRole, cards: Vec<Card>) -> Self {
        Self { role, cards }
    }

    #[must_use]
    pub fn role(&self) -> PileRole {
        self.role
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The top `n` cards, bottom to top, without removing them.
    ///
    /// Returns `None` if the pile holds fewer than `n` cards.
    #[must_use]
    pub fn top_run(&self, n: usize) -> Option<&[Card]> {
        let start = self.cards.len().checked_sub(n)?;
        Some(&self.cards[start..])
    }

    /// Card at `index` counted from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return the top `n` cards, bottom-to-top order preserved.
    ///
    /// Fails without touching the pile if it holds fewer than `n` cards.
    pub fn take_top(&mut self, n: usize) -> Result<Run> {
        let available = self.cards.len();
        let start = available
            .checked_sub(n)
            .ok_or(EngineError::InsufficientCards {
                requested: n,
                available,
            })?;
        Ok(self.cards.drain(start..).collect())
    }

    /// Append `cards` in order (the last one becomes the top).
    pub fn add_run(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Turn the top card face-up.
    ///
    /// Returns true if a card was actually flipped.
    pub fn flip_top_if_needed(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.face_up => {
                top.face_up = true;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
