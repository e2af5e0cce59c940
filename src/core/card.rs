//! Cards: suit, rank, identity and the face-up flag.
//!
//! A `Card` is a value type. Its suit, rank and id never change after
//! construction; only `face_up` is mutable. Two-deck Spider contains two
//! cards of every suit/rank pair, so every card also carries a `CardId`
//! unique within its deck.
//!
//! ## Usage
//!
//! ```
//! use solitaire_engine::core::{Card, CardId, Suit};
//!
//! let seven = Card::new(CardId::new(0), Suit::Hearts, 7, true).unwrap();
//! assert!(seven.is_red());
//! assert_eq!(seven.to_string(), "7♥");
//!
//! // Ranks outside 1..=13 are rejected.
//! assert!(Card::new(CardId::new(1), Suit::Spades, 14, false).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Colour of the suit: Hearts and Diamonds are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card colour, used by Klondike's alternating-colour rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A rank in `1..=13` (Ace = 1, King = 13).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Create a rank, rejecting values outside `1..=13`.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=13).contains(&value) {
            Ok(Self(value))
        } else {
            Err(EngineError::InvalidRank(value))
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate Ace through King.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            n => write!(f, "{n}"),
        }
    }
}

/// Identity of a physical card within one deck.
///
/// Assigned sequentially when the deck is built, so a 104-card Spider deck
/// uses ids `0..104`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    suit: Suit,
    rank: Rank,
    /// Whether the card is visible (and therefore eligible to move).
    pub face_up: bool,
}

impl Card {
    /// Create a card. Fails if `rank` is outside `1..=13`.
    pub fn new(id: CardId, suit: Suit, rank: u8, face_up: bool) -> Result<Self> {
        Ok(Self::with_rank(id, suit, Rank::new(rank)?, face_up))
    }

    /// Create a card from an already validated rank.
    #[must_use]
    pub const fn with_rank(id: CardId, suit: Suit, rank: Rank, face_up: bool) -> Self {
        Self {
            id,
            suit,
            rank,
            face_up,
        }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.suit.color(), Color::Red)
    }

    /// True if this card is exactly one rank below `other`.
    #[must_use]
    pub const fn is_one_below(&self, other: &Card) -> bool {
        self.rank.value() + 1 == other.rank.value()
    }

    /// True if this card is one rank below `other` and shares its suit.
    #[must_use]
    pub fn is_one_below_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit && self.is_one_below(other)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bounds() {
        assert_eq!(Rank::new(0), Err(EngineError::InvalidRank(0)));
        assert_eq!(Rank::new(14), Err(EngineError::InvalidRank(14)));
        assert_eq!(Rank::new(1), Ok(Rank::ACE));
        assert_eq!(Rank::new(13), Ok(Rank::KING));
    }

    #[test]
    fn test_card_construction_rejects_bad_rank() {
        assert!(Card::new(CardId::new(0), Suit::Clubs, 0, false).is_err());
        assert!(Card::new(CardId::new(0), Suit::Clubs, 14, false).is_err());
        assert!(Card::new(CardId::new(0), Suit::Clubs, 1, false).is_ok());
        assert!(Card::new(CardId::new(0), Suit::Clubs, 13, false).is_ok());
    }

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn test_one_below() {
        let six = Card::new(CardId::new(0), Suit::Spades, 6, true).unwrap();
        let seven = Card::new(CardId::new(1), Suit::Spades, 7, true).unwrap();
        let red_seven = Card::new(CardId::new(2), Suit::Hearts, 7, true).unwrap();

        assert!(six.is_one_below(&seven));
        assert!(!seven.is_one_below(&six));
        assert!(six.is_one_below_same_suit(&seven));
        assert!(!six.is_one_below_same_suit(&red_seven));
    }

    #[test]
    fn test_duplicate_faces_are_distinct_cards() {
        let a = Card::new(CardId::new(3), Suit::Spades, 9, false).unwrap();
        let b = Card::new(CardId::new(55), Suit::Spades, 9, false).unwrap();

        assert_eq!((a.suit(), a.rank()), (b.suit(), b.rank()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let ace = Card::new(CardId::new(0), Suit::Spades, 1, true).unwrap();
        let ten = Card::new(CardId::new(1), Suit::Diamonds, 10, true).unwrap();
        let queen = Card::new(CardId::new(2), Suit::Clubs, 12, true).unwrap();

        assert_eq!(ace.to_string(), "A♠");
        assert_eq!(ten.to_string(), "10♦");
        assert_eq!(queen.to_string(), "Q♣");
    }

    #[test]
    fn test_rank_serde_rejects_out_of_range() {
        let json = serde_json::to_string(&Rank::KING).unwrap();
        assert_eq!(json, "13");

        let bad: std::result::Result<Rank, _> = serde_json::from_str("0");
        assert!(bad.is_err());
    }
}
