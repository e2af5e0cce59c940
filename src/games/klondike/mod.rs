//! Klondike solitaire.
//!
//! One deck over seven columns holding 1 to 7 cards, top card face-up, with
//! the remaining 24 cards in the stock. Cards are drawn one or three at a
//! time onto the waste; an exhausted stock is refilled by turning the waste
//! over. Klondike tracks moves but never changes the score.

mod game;

pub use game::KlondikeGame;
