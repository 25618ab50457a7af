//! # klondike-engine
//!
//! Game state and move validation for single-deck Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **One owner**: The `Klondike` controller owns the only live
//!    `GameState`. Callers get snapshots, never references into it.
//!
//! 2. **Typed piles**: Tableau, foundation, stock and waste are distinct
//!    types, each exposing only its own mutations.
//!
//! 3. **Rejections are values**: An illegal move is an expected outcome and
//!    comes back as a typed `Rejection` with the state untouched.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles use `im` vectors, so snapshots
//!   are cheap to take after every request.
//!
//! - **Deterministic Deals**: Shuffling runs on a seeded ChaCha8 stream,
//!   so a seed reproduces a game.
//!
//! ## Modules
//!
//! - `core`: Pile identifiers, configuration, move requests, state, RNG
//! - `cards`: Cards and the 52-card deck
//! - `piles`: Typed pile roles
//! - `rules`: Move validation and execution
//! - `game`: Dealing and the controller
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{Klondike, KlondikeConfig, MoveRequest, FoundationIndex};
//!
//! let mut game = Klondike::new(KlondikeConfig::default().with_seed(3));
//! game.request_draw();
//!
//! let outcome = game.request_move(MoveRequest::waste_to_foundation(FoundationIndex::new(0).unwrap()));
//! if let Some(reason) = outcome.rejection() {
//!     println!("{reason}");
//! }
//! ```

pub mod core;
pub mod cards;
pub mod piles;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    FoundationIndex, TableauIndex, PileId, KlondikeConfig,
    GameRng, GameRngState,
    MoveSource, MoveTarget, MoveRequest, MoveReport, DrawReport, RecycleReport,
    GameState, InvariantViolation,
};

pub use crate::cards::{Card, Color, Rank, Suit, Deck};

pub use crate::piles::{Pile, TableauPile, FoundationPile, StockPile, WastePile};

pub use crate::rules::{
    InvalidMove, Precondition, Rejection,
    can_move_to_foundation, can_move_to_tableau,
};

pub use crate::game::{
    Klondike, Outcome, MoveOutcome, DrawOutcome, RecycleOutcome,
    deal, shuffled_deal,
};
