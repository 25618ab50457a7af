//! Move requests and the reports describing applied changes.
//!
//! A `MoveRequest` is built by the presentation layer from a gesture and
//! passed verbatim into the engine. The engine never looks at rendering
//! artifacts; everything it needs is in the request.
//!
//! ```
//! use klondike_engine::core::{MoveRequest, TableauIndex, FoundationIndex};
//!
//! let from = TableauIndex::new(2).unwrap();
//! let to = TableauIndex::new(5).unwrap();
//!
//! // Drag the run starting at card 3 of column 2 onto column 5
//! let run = MoveRequest::tableau_to_tableau(from, 3, to);
//!
//! // Drop the waste card on the first foundation
//! let home = MoveRequest::waste_to_foundation(FoundationIndex::new(0).unwrap());
//! # let _ = (run, home);
//! ```

use serde::{Deserialize, Serialize};

use super::config::{FoundationIndex, PileId, TableauIndex};
use crate::cards::Card;
use crate::piles::Run;

/// Where the moved cards come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSource {
    /// The top card of the waste.
    Waste,
    /// A tableau column, starting at `start` (0 = bottom card) and taking
    /// everything above it.
    Tableau { column: TableauIndex, start: usize },
}

impl MoveSource {
    #[must_use]
    pub fn pile(&self) -> PileId {
        match self {
            MoveSource::Waste => PileId::Waste,
            MoveSource::Tableau { column, .. } => PileId::Tableau(*column),
        }
    }
}

/// Where the moved cards go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    Tableau(TableauIndex),
    Foundation(FoundationIndex),
}

impl MoveTarget {
    #[must_use]
    pub fn pile(&self) -> PileId {
        match self {
            MoveTarget::Tableau(i) => PileId::Tableau(*i),
            MoveTarget::Foundation(i) => PileId::Foundation(*i),
        }
    }
}

/// A complete move descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: MoveSource,
    pub target: MoveTarget,
}

impl MoveRequest {
    #[must_use]
    pub fn new(source: MoveSource, target: MoveTarget) -> Self {
        Self { source, target }
    }

    #[must_use]
    pub fn waste_to_tableau(column: TableauIndex) -> Self {
        Self::new(MoveSource::Waste, MoveTarget::Tableau(column))
    }

    #[must_use]
    pub fn waste_to_foundation(foundation: FoundationIndex) -> Self {
        Self::new(MoveSource::Waste, MoveTarget::Foundation(foundation))
    }

    #[must_use]
    pub fn tableau_to_tableau(from: TableauIndex, start: usize, to: TableauIndex) -> Self {
        Self::new(
            MoveSource::Tableau { column: from, start },
            MoveTarget::Tableau(to),
        )
    }

    /// Move the single card at `start` of a column to a foundation.
    /// Only legal when `start` is the top card.
    #[must_use]
    pub fn tableau_to_foundation(from: TableauIndex, start: usize, to: FoundationIndex) -> Self {
        Self::new(
            MoveSource::Tableau { column: from, start },
            MoveTarget::Foundation(to),
        )
    }
}

/// Delta produced by an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub source: PileId,
    pub target: PileId,
    /// Moved cards, bottom to top.
    pub moved: Run,
    /// The source column's new top card, if it was turned face-up.
    pub revealed: Option<Card>,
}

/// Delta produced by a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReport {
    /// The card now on top of the waste.
    pub drawn: Card,
}

/// Delta produced by a recycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleReport {
    /// Number of cards moved from the waste back to the stock.
    pub recycled: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(i: usize) -> TableauIndex {
        TableauIndex::new(i).unwrap()
    }

    #[test]
    fn test_request_constructors() {
        let request = MoveRequest::tableau_to_tableau(col(1), 4, col(6));

        assert_eq!(request.source, MoveSource::Tableau { column: col(1), start: 4 });
        assert_eq!(request.target, MoveTarget::Tableau(col(6)));
        assert_eq!(request.source.pile(), PileId::Tableau(col(1)));
        assert_eq!(request.target.pile(), PileId::Tableau(col(6)));
    }

    #[test]
    fn test_waste_source_pile() {
        let foundation = FoundationIndex::new(2).unwrap();
        let request = MoveRequest::waste_to_foundation(foundation);

        assert_eq!(request.source.pile(), PileId::Waste);
        assert_eq!(request.target.pile(), PileId::Foundation(foundation));
    }

    #[test]
    fn test_request_serialization() {
        let request = MoveRequest::tableau_to_foundation(col(3), 5, FoundationIndex::new(1).unwrap());

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: MoveRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request, deserialized);
    }
}
