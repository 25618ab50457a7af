//! Pile abstraction.
//!
//! Piles are typed by role so that, for example, a foundation can never be
//! passed where a tableau target is expected.

pub mod pile;

pub use pile::{FoundationPile, Pile, Run, StockPile, TableauPile, WastePile};
