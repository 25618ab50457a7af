//! Applying validated moves, draws and recycles.
//!
//! Each operation either commits completely and reports the delta, or
//! returns a rejection and leaves the state untouched.

use log::debug;

use crate::core::{DrawReport, GameState, MoveReport, MoveRequest, MoveSource, MoveTarget, RecycleReport};
use crate::piles::Run;

use super::rejection::{InvalidMove, Precondition};
use super::validator::check_move;

/// Validate and apply a move.
///
/// The moved cards keep their relative order. When the source is a
/// tableau column that still has cards, its new top is turned face-up.
pub fn apply_move(state: &mut GameState, request: &MoveRequest) -> Result<MoveReport, InvalidMove> {
    check_move(state, request)?;

    let moved: Run = match request.source {
        MoveSource::Waste => state.waste_mut().take_top().into_iter().collect(),
        MoveSource::Tableau { column, start } => state.tableau_mut(column).take_run(start),
    };

    match request.target {
        MoveTarget::Foundation(index) => {
            let foundation = state.foundation_mut(index);
            for &card in &moved {
                foundation.place(card);
            }
        }
        MoveTarget::Tableau(column) => state.tableau_mut(column).place_run(&moved),
    }

    let revealed = match request.source {
        MoveSource::Tableau { column, .. } => state.tableau_mut(column).reveal_top(),
        MoveSource::Waste => None,
    };

    let report = MoveReport {
        source: request.source.pile(),
        target: request.target.pile(),
        moved,
        revealed,
    };
    debug!(
        "moved {} card(s) from {} to {}{}",
        report.moved.len(),
        report.source,
        report.target,
        report.revealed.map(|c| format!(", revealed {c}")).unwrap_or_default()
    );
    Ok(report)
}

/// Turn the top stock card face-up onto the waste.
pub fn draw_from_stock(state: &mut GameState) -> Result<DrawReport, Precondition> {
    let (stock, waste) = state.stock_and_waste_mut();
    let drawn = stock.draw().ok_or(Precondition::StockEmpty)?;
    waste.receive(drawn);

    debug!("drew {drawn}, {} left in stock", stock.len());
    Ok(DrawReport { drawn })
}

/// Move the whole waste back to an empty stock, face-down.
///
/// The waste is restacked in reverse so the first card drawn last cycle
/// is the first drawn next cycle.
pub fn recycle_stock(state: &mut GameState) -> Result<RecycleReport, Precondition> {
    let (stock, waste) = state.stock_and_waste_mut();
    if !stock.is_empty() {
        return Err(Precondition::StockNotEmpty);
    }
    if waste.is_empty() {
        return Err(Precondition::NothingToRecycle);
    }

    let cards = waste.drain_newest_first();
    let recycled = cards.len();
    stock.refill(cards);

    debug!("recycled {recycled} cards from waste to stock");
    Ok(RecycleReport { recycled })
}
