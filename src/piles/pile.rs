//! Pile storage and the four typed pile roles.
//!
//! `Pile` is an ordered card sequence whose last element is the top.
//! Each role wraps it and exposes only the mutations that role allows:
//!
//! - `TableauPile`: take a run off any index, place a run, reveal the top
//! - `FoundationPile`: place a single card
//! - `StockPile`: draw the top card face-up, refill from the waste
//! - `WastePile`: receive drawn cards, give up its top card, drain for recycle
//!
//! All roles deref to `Pile` for read access. Cards live in an
//! `im::Vector`, so cloning a pile (and the whole game state) is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Deref;

use crate::cards::Card;

/// Cards moved as one unit. A run never exceeds 13 cards.
pub type Run = SmallVec<[Card; 13]>;

/// Ordered card sequence, top = last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top (last) card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Card at `index` (0 = bottom).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator + '_ {
        self.cards.iter()
    }

    /// Copy the cards out, bottom to top.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    fn pop(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    fn split_off(&mut self, at: usize) -> Vector<Card> {
        self.cards.split_off(at)
    }

    fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.back_mut()
    }
}

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }
}

macro_rules! pile_role {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name(Pile);

        impl $name {
            /// Create an empty pile.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl Deref for $name {
            type Target = Pile;

            fn deref(&self) -> &Pile {
                &self.0
            }
        }

        impl From<Vec<Card>> for $name {
            fn from(cards: Vec<Card>) -> Self {
                Self(Pile::from(cards))
            }
        }
    };
}

pile_role! {
    /// One of the seven main playing columns.
    TableauPile
}

pile_role! {
    /// One of the four suit-ordered piles, built Ace to King.
    FoundationPile
}

pile_role! {
    /// The face-down draw pile.
    StockPile
}

pile_role! {
    /// The face-up pile receiving cards drawn from the stock.
    WastePile
}

impl TableauPile {
    /// Index where the face-up suffix begins, or `None` if the top card is
    /// face-down or the column is empty.
    #[must_use]
    pub fn movable_run_start(&self) -> Option<usize> {
        let face_up = self.0.iter().rev().take_while(|c| c.face_up).count();
        (face_up > 0).then(|| self.len() - face_up)
    }

    /// Whether the cards from `start` to the top form a movable run:
    /// all face-up, alternating color, descending by one.
    #[must_use]
    pub fn is_movable_run(&self, start: usize) -> bool {
        if start >= self.len() {
            return false;
        }
        let run: Vec<&Card> = self.0.iter().skip(start).collect();
        run.iter().all(|c| c.face_up) && run.windows(2).all(|w| w[1].stacks_on(w[0]))
    }

    /// Deal a card onto the column.
    pub(crate) fn deal(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Remove the cards from `start` to the top, preserving order.
    pub(crate) fn take_run(&mut self, start: usize) -> Run {
        self.0.split_off(start).into_iter().collect()
    }

    /// Append a run on top, preserving order.
    pub(crate) fn place_run(&mut self, run: &[Card]) {
        for &card in run {
            self.0.push(card);
        }
    }

    /// Flip the top card face-up if it is face-down.
    ///
    /// Returns the card if it was flipped.
    pub(crate) fn reveal_top(&mut self) -> Option<Card> {
        let top = self.0.top_mut()?;
        if top.face_up {
            return None;
        }
        top.face_up = true;
        Some(*top)
    }
}

impl FoundationPile {
    /// Whether the pile holds a full Ace..King sequence.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == 13
    }

    pub(crate) fn place(&mut self, card: Card) {
        self.0.push(card);
    }
}

impl StockPile {
    /// Pop the top card and turn it face-up.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        let mut card = self.0.pop()?;
        card.face_up = true;
        Some(card)
    }

    /// Refill from recycled waste cards, given in the order they become
    /// stacked (first = bottom). Every card is turned face-down.
    pub(crate) fn refill(&mut self, cards: impl IntoIterator<Item = Card>) {
        for mut card in cards {
            card.face_up = false;
            self.0.push(card);
        }
    }

    /// Load the undealt remainder of a deck, keeping its order.
    pub(crate) fn load(&mut self, card: Card) {
        self.0.push(card);
    }
}

impl WastePile {
    pub(crate) fn receive(&mut self, card: Card) {
        self.0.push(card);
    }

    pub(crate) fn take_top(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Empty the waste, returning cards newest first, which is the order
    /// they must be restacked so the oldest drawn card ends on top.
    pub(crate) fn drain_newest_first(&mut self) -> Vec<Card> {
        let cards = self.0.split_off(0);
        cards.into_iter().rev().collect()
    }
}
