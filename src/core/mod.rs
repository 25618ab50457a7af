//! Core engine types: identifiers, configuration, move requests, state, RNG.

pub mod config;
pub mod rng;
pub mod action;
pub mod state;

pub use config::{FoundationIndex, KlondikeConfig, PileId, TableauIndex, FOUNDATION_PILES, TABLEAU_COLUMNS};
pub use rng::{GameRng, GameRngState};
pub use action::{DrawReport, MoveReport, MoveRequest, MoveSource, MoveTarget, RecycleReport};
pub use state::{GameState, InvariantViolation};
