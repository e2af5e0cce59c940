//! Spider solitaire.
//!
//! Two decks over ten columns:
//! - Columns 0-3 are dealt six cards, columns 4-9 five, top card face-up
//! - The remaining 50 cards form the stock, dealt a row at a time
//! - Completed King-to-Ace runs move to the foundations automatically
//!
//! Scoring starts at 500 and costs one point per move and five per deal.

mod game;

pub use game::SpiderGame;
