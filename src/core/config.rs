//! Variant configuration.
//!
//! Hosts configure a session at construction time:
//! - `SpiderConfig`: suit mode and starting score
//! - `KlondikeConfig`: stock draw count and starting score
//!
//! Both are plain serializable values with builder-style setters. Call
//! `validate()` (engines do this in their constructors) to reject values the
//! rules don't support.

use serde::{Deserialize, Serialize};

use super::card::Suit;
use super::error::{EngineError, Result};

/// Score applied for each Spider run move.
pub const SPIDER_MOVE_SCORE: i32 = -1;
/// Score applied for each Spider stock deal.
pub const SPIDER_DEAL_SCORE: i32 = -5;
/// Spider starts every game with this many points.
pub const SPIDER_STARTING_SCORE: i32 = 500;
/// Klondike starts every game with this many points. No action changes it.
pub const KLONDIKE_STARTING_SCORE: i32 = 500;

/// How many distinct suits a Spider deck uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitMode {
    /// All 104 cards are Spades.
    #[default]
    One,
    /// Spades and Hearts, 52 of each.
    Two,
    /// Two full 52-card decks.
    Four,
}

impl SuitMode {
    /// The suits that appear in a deck built with this mode.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            SuitMode::One => &[Suit::Spades],
            SuitMode::Two => &[Suit::Spades, Suit::Hearts],
            SuitMode::Four => &Suit::ALL,
        }
    }
}

/// Which game a deck or session is built for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Single 52-card deck.
    Klondike,
    /// Two decks (104 cards) in the given suit mode.
    Spider(SuitMode),
}

impl Variant {
    /// Number of cards in a deck for this variant.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        match self {
            Variant::Klondike => 52,
            Variant::Spider(_) => 104,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Klondike => write!(f, "klondike"),
            Variant::Spider(SuitMode::One) => write!(f, "spider-1"),
            Variant::Spider(SuitMode::Two) => write!(f, "spider-2"),
            Variant::Spider(SuitMode::Four) => write!(f, "spider-4"),
        }
    }
}

/// Spider session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiderConfig {
    /// Number of distinct suits in the deck.
    pub suit_mode: SuitMode,

    /// Score at the start of each game.
    pub starting_score: i32,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            suit_mode: SuitMode::One,
            starting_score: SPIDER_STARTING_SCORE,
        }
    }
}

impl SpiderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suit mode.
    #[must_use]
    pub fn with_suit_mode(mut self, suit_mode: SuitMode) -> Self {
        self.suit_mode = suit_mode;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i32) -> Self {
        self.starting_score = score;
        self
    }

    /// Every Spider configuration is currently playable.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Klondike session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards turned from stock to waste per draw (1 or 3).
    pub draw_count: u8,

    /// Score at the start of each game.
    pub starting_score: i32,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            draw_count: 1,
            starting_score: KLONDIKE_STARTING_SCORE,
        }
    }
}

impl KlondikeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draw count.
    #[must_use]
    pub fn with_draw_count(mut self, draw_count: u8) -> Self {
        self.draw_count = draw_count;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i32) -> Self {
        self.starting_score = score;
        self
    }

    /// Reject draw counts other than 1 or 3.
    pub fn validate(&self) -> Result<()> {
        match self.draw_count {
            1 | 3 => Ok(()),
            n => Err(EngineError::InvalidConfig(format!(
                "draw_count must be 1 or 3, got {n}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_modes() {
        assert_eq!(SuitMode::One.suits(), &[Suit::Spades]);
        assert_eq!(SuitMode::Two.suits().len(), 2);
        assert_eq!(SuitMode::Four.suits().len(), 4);
    }

    #[test]
    fn test_deck_sizes() {
        assert_eq!(Variant::Klondike.deck_size(), 52);
        assert_eq!(Variant::Spider(SuitMode::Four).deck_size(), 104);
    }

    #[test]
    fn test_spider_defaults() {
        let config = SpiderConfig::default();
        assert_eq!(config.suit_mode, SuitMode::One);
        assert_eq!(config.starting_score, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_klondike_defaults() {
        let config = KlondikeConfig::default();
        assert_eq!(config.draw_count, 1);
        assert_eq!(config.starting_score, 500);
    }

    #[test]
    fn test_klondike_draw_count_validation() {
        assert!(KlondikeConfig::new().validate().is_ok());
        assert!(KlondikeConfig::new().with_draw_count(3).validate().is_ok());

        let err = KlondikeConfig::new().with_draw_count(2).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_serde() {
        let config = SpiderConfig::new()
            .with_suit_mode(SuitMode::Four)
            .with_starting_score(0);

        let json = serde_json::to_string(&config).unwrap();
        let back: SpiderConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }
}
