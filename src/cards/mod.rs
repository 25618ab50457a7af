//! Card and deck model.
//!
//! - `Card`: rank, suit and orientation
//! - `Deck`: the canonical 52 cards and the Fisher–Yates shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, Rank, Suit};
pub use deck::{shuffle_slice, Deck, DECK_SIZE};
