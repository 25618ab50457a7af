//! Dealing and the game controller.
//!
//! - `deal`: build the opening layout from a deck
//! - `klondike`: the `Klondike` controller that owns the state

pub mod deal;
pub mod klondike;

pub use deal::{deal, shuffled_deal, TABLEAU_DEAL};
pub use klondike::{DrawOutcome, Klondike, MoveOutcome, Outcome, RecycleOutcome};
