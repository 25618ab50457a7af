//! The opening deal.
//!
//! Cards are taken from the top (end) of the deck. Column `i` receives
//! `i + 1` cards and only its last card is face-up. The remaining cards
//! become the stock, face-down, keeping their deck order.

use log::debug;

use crate::cards::Deck;
use crate::core::{GameRng, GameState, TableauIndex, TABLEAU_COLUMNS};

/// Cards dealt to the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// Deal a fresh layout from a (normally shuffled) deck.
///
/// Panics if the deck holds fewer than 28 cards.
#[must_use]
pub fn deal(deck: Deck) -> GameState {
    assert!(
        deck.len() >= TABLEAU_DEAL,
        "Deal needs at least {TABLEAU_DEAL} cards, got {}",
        deck.len()
    );

    let mut cards = deck.into_cards();
    let split = cards.len() - TABLEAU_DEAL;
    let mut from_top = cards.split_off(split).into_iter().rev();

    let mut state = GameState::empty();
    for column in TableauIndex::all() {
        let size = column.get() + 1;
        let pile = state.tableau_mut(column);
        for (n, mut card) in from_top.by_ref().take(size).enumerate() {
            card.face_up = n + 1 == size;
            pile.deal(card);
        }
    }

    let stock = state.stock_mut();
    for mut card in cards {
        card.face_up = false;
        stock.load(card);
    }

    debug!("dealt {TABLEAU_DEAL} cards to the tableau, {} to the stock", state.stock().len());
    state
}

/// Create, shuffle and deal a new game.
#[must_use]
pub fn shuffled_deal(rng: &mut GameRng) -> GameState {
    let mut deck = Deck::standard();
    deck.shuffle(rng);
    deal(deck)
}
