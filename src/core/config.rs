//! Pile identifiers and engine configuration.
//!
//! - `TableauIndex` / `FoundationIndex`: checked indexes into the layout
//! - `PileId`: names any single pile
//! - `KlondikeConfig`: seed and invariant checking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Index of a tableau column (0..7).
///
/// Can only be constructed in range, so indexing a layout with it never
/// goes out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableauIndex(u8);

impl TableauIndex {
    /// Create a tableau index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < TABLEAU_COLUMNS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all columns, left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..TABLEAU_COLUMNS as u8).map(Self)
    }
}

impl TryFrom<u8> for TableauIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(value)).ok_or_else(|| format!("tableau index {value} out of range"))
    }
}

impl From<TableauIndex> for u8 {
    fn from(index: TableauIndex) -> Self {
        index.0
    }
}

/// Index of a foundation pile (0..4).
///
/// Foundations are not bound to a suit up front; the first Ace placed
/// decides which suit a pile builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FoundationIndex(u8);

impl FoundationIndex {
    /// Create a foundation index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < FOUNDATION_PILES {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all foundations.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..FOUNDATION_PILES as u8).map(Self)
    }
}

impl TryFrom<u8> for FoundationIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(value)).ok_or_else(|| format!("foundation index {value} out of range"))
    }
}

impl From<FoundationIndex> for u8 {
    fn from(index: FoundationIndex) -> Self {
        index.0
    }
}

/// Any single pile in the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(FoundationIndex),
    Tableau(TableauIndex),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(i) => write!(f, "foundation {}", i.get()),
            PileId::Tableau(i) => write!(f, "tableau {}", i.get()),
        }
    }
}

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use klondike_engine::core::KlondikeConfig;
///
/// let config = KlondikeConfig::default().with_seed(1234);
/// assert_eq!(config.seed, Some(1234));
/// assert!(config.verify_invariants);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KlondikeConfig {
    /// Seed for shuffling. `None` picks a fresh random seed.
    pub seed: Option<u64>,

    /// Check the closed-system invariant after every mutation and panic
    /// if it is broken.
    pub verify_invariants: bool,
}

impl Default for KlondikeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            verify_invariants: true,
        }
    }
}

impl KlondikeConfig {
    /// Use a fixed seed so deals are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Skip the post-mutation invariant check.
    #[must_use]
    pub fn without_invariant_checks(mut self) -> Self {
        self.verify_invariants = false;
        self
    }
}
