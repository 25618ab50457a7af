//! Move legality.
//!
//! Pure functions of the current state: nothing here mutates or logs.
//! The `check_*` functions say why a move is illegal, and the `can_*`
//! functions are their boolean forms.
//!
//! ## Rules
//!
//! - Foundation: an Ace starts an empty pile, then the same suit one rank
//!   higher. Only the single top card of a source may go.
//! - Tableau: a King fills an empty column, otherwise opposite color and
//!   exactly one rank lower than the target top. A tableau source moves the
//!   whole face-up run from the chosen card.
//! - Face-down cards never move, and no rank wraps around.

use crate::cards::{Card, Rank};
use crate::core::{FoundationIndex, GameState, MoveRequest, MoveSource, MoveTarget, TableauIndex};

use super::rejection::InvalidMove;

/// Resolve the card a source would move: the waste top, or the card at
/// `start` in a tableau column.
fn source_card(state: &GameState, source: MoveSource) -> Result<Card, InvalidMove> {
    let card = match source {
        MoveSource::Waste => *state.waste().top().ok_or(InvalidMove::EmptySource)?,
        MoveSource::Tableau { column, start } => {
            let pile = state.tableau(column);
            if pile.is_empty() {
                return Err(InvalidMove::EmptySource);
            }
            *pile.get(start).ok_or(InvalidMove::StartOutOfRange)?
        }
    };

    if !card.face_up {
        return Err(InvalidMove::FaceDown);
    }
    Ok(card)
}

/// Check a move onto a foundation, returning the card that would move.
pub fn check_move_to_foundation(
    state: &GameState,
    source: MoveSource,
    foundation: FoundationIndex,
) -> Result<Card, InvalidMove> {
    let card = source_card(state, source)?;

    if let MoveSource::Tableau { column, start } = source {
        if start + 1 != state.tableau(column).len() {
            return Err(InvalidMove::RunToFoundation);
        }
    }

    match state.foundation(foundation).top() {
        None if card.rank == Rank::Ace => Ok(card),
        None => Err(InvalidMove::NeedsAce),
        Some(top) if top.suit != card.suit => Err(InvalidMove::WrongSuit),
        Some(top) if !card.follows_on_foundation(top) => Err(InvalidMove::NotNextRank),
        Some(_) => Ok(card),
    }
}

/// Whether `source` may move onto `foundation`.
#[must_use]
pub fn can_move_to_foundation(state: &GameState, source: MoveSource, foundation: FoundationIndex) -> bool {
    check_move_to_foundation(state, source, foundation).is_ok()
}

/// Check a move onto a tableau column, returning the first card of the
/// run that would move.
pub fn check_move_to_tableau(
    state: &GameState,
    source: MoveSource,
    target: TableauIndex,
) -> Result<Card, InvalidMove> {
    if let MoveSource::Tableau { column, .. } = source {
        if column == target {
            return Err(InvalidMove::SameColumn);
        }
    }

    let card = source_card(state, source)?;

    if let MoveSource::Tableau { column, start } = source {
        if !state.tableau(column).is_movable_run(start) {
            return Err(InvalidMove::BrokenRun);
        }
    }

    match state.tableau(target).top() {
        None if card.rank == Rank::King => Ok(card),
        None => Err(InvalidMove::NeedsKing),
        Some(top) if top.color() == card.color() => Err(InvalidMove::SameColor),
        Some(top) if !card.stacks_on(top) => Err(InvalidMove::NotNextRank),
        Some(_) => Ok(card),
    }
}

/// Whether `source` may move onto tableau column `target`.
#[must_use]
pub fn can_move_to_tableau(state: &GameState, source: MoveSource, target: TableauIndex) -> bool {
    check_move_to_tableau(state, source, target).is_ok()
}

/// Check any move request.
pub fn check_move(state: &GameState, request: &MoveRequest) -> Result<Card, InvalidMove> {
    match request.target {
        MoveTarget::Foundation(index) => check_move_to_foundation(state, request.source, index),
        MoveTarget::Tableau(column) => check_move_to_tableau(state, request.source, column),
    }
}
