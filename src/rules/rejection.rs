//! Why a request was turned down.
//!
//! Rejections are expected outcomes of play, not faults. The state is
//! always left unchanged when one is returned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A move that breaks a legality rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidMove {
    /// The source pile has no cards.
    EmptySource,
    /// The run start index is past the top of the source column.
    StartOutOfRange,
    /// The card to move is face-down.
    FaceDown,
    /// Source and target are the same column.
    SameColumn,
    /// The cards from the start index are not an alternating descending run.
    BrokenRun,
    /// More than one card was offered to a foundation.
    RunToFoundation,
    /// Only an Ace may start a foundation.
    NeedsAce,
    /// Only a King may fill an empty column.
    NeedsKing,
    /// Foundation cards must share the pile's suit.
    WrongSuit,
    /// Tableau cards must alternate color.
    SameColor,
    /// The card is not exactly one rank away from the target top.
    NotNextRank,
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::EmptySource => "source pile is empty",
            Self::StartOutOfRange => "no card at the requested position",
            Self::FaceDown => "card is face-down",
            Self::SameColumn => "source and target are the same column",
            Self::BrokenRun => "cards do not form a movable run",
            Self::RunToFoundation => "only a single top card can move to a foundation",
            Self::NeedsAce => "an empty foundation only accepts an Ace",
            Self::NeedsKing => "an empty column only accepts a King",
            Self::WrongSuit => "foundation requires the same suit",
            Self::SameColor => "tableau requires alternating colors",
            Self::NotNextRank => "rank is not adjacent",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for InvalidMove {}

/// A draw or recycle attempted in the wrong situation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precondition {
    /// Nothing left to draw.
    StockEmpty,
    /// Recycling requires an empty stock.
    StockNotEmpty,
    /// Stock and waste are both empty.
    NothingToRecycle,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::StockEmpty => "stock is empty",
            Self::StockNotEmpty => "stock still has cards",
            Self::NothingToRecycle => "waste is empty",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for Precondition {}

/// Any rejected request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    InvalidMove(InvalidMove),
    Precondition(Precondition),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMove(reason) => write!(f, "invalid move: {reason}"),
            Self::Precondition(reason) => write!(f, "not possible now: {reason}"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidMove(reason) => Some(reason),
            Self::Precondition(reason) => Some(reason),
        }
    }
}

impl From<InvalidMove> for Rejection {
    fn from(reason: InvalidMove) -> Self {
        Self::InvalidMove(reason)
    }
}

impl From<Precondition> for Rejection {
    fn from(reason: Precondition) -> Self {
        Self::Precondition(reason)
    }
}
