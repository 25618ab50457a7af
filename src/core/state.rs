//! Game state: the full layout of piles at one point in time.
//!
//! ## GameState
//!
//! - Seven tableau columns
//! - Four foundation piles
//! - Stock and waste
//!
//! The state is a plain value. Piles use `im` persistent vectors, so
//! `clone()` is cheap and the presentation layer can hold a snapshot that
//! is never affected by later mutations.
//!
//! ## Closed system
//!
//! In any state reachable from a deal, the 52 distinct cards are spread
//! across the piles exactly once. [`GameState::check_invariants`] verifies
//! this along with the orientation rules of each pile role.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::{FoundationIndex, PileId, TableauIndex, FOUNDATION_PILES, TABLEAU_COLUMNS};
use crate::cards::{Card, DECK_SIZE};
use crate::piles::{FoundationPile, StockPile, TableauPile, WastePile};

/// Complete game layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    tableau: [TableauPile; TABLEAU_COLUMNS],
    foundations: [FoundationPile; FOUNDATION_PILES],
    stock: StockPile,
    waste: WastePile,
}

impl GameState {
    /// Create a state with every pile empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an arbitrary layout. Cards are taken as given (bottom first);
    /// no invariants are checked.
    #[must_use]
    pub fn with_piles(
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
        foundations: [Vec<Card>; FOUNDATION_PILES],
        stock: Vec<Card>,
        waste: Vec<Card>,
    ) -> Self {
        Self {
            tableau: tableau.map(TableauPile::from),
            foundations: foundations.map(FoundationPile::from),
            stock: StockPile::from(stock),
            waste: WastePile::from(waste),
        }
    }

    // === Read access ===

    #[must_use]
    pub fn tableau(&self, column: TableauIndex) -> &TableauPile {
        &self.tableau[column.get()]
    }

    #[must_use]
    pub fn foundation(&self, index: FoundationIndex) -> &FoundationPile {
        &self.foundations[index.get()]
    }

    #[must_use]
    pub fn stock(&self) -> &StockPile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &WastePile {
        &self.waste
    }

    /// All tableau columns, left to right.
    #[must_use]
    pub fn tableau_columns(&self) -> &[TableauPile; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// All foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[FoundationPile; FOUNDATION_PILES] {
        &self.foundations
    }

    /// Number of cards in a pile.
    #[must_use]
    pub fn pile_len(&self, pile: PileId) -> usize {
        match pile {
            PileId::Stock => self.stock.len(),
            PileId::Waste => self.waste.len(),
            PileId::Foundation(i) => self.foundation(i).len(),
            PileId::Tableau(i) => self.tableau(i).len(),
        }
    }

    /// Total number of cards across every pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.tableau.iter().map(|p| p.len()).sum::<usize>()
            + self.foundations.iter().map(|p| p.len()).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// Every card with the pile holding it.
    pub fn cards(&self) -> impl Iterator<Item = (PileId, &Card)> + '_ {
        let tableau = TableauIndex::all()
            .flat_map(move |i| self.tableau(i).iter().map(move |c| (PileId::Tableau(i), c)));
        let foundations = FoundationIndex::all()
            .flat_map(move |i| self.foundation(i).iter().map(move |c| (PileId::Foundation(i), c)));
        let stock = self.stock.iter().map(|c| (PileId::Stock, c));
        let waste = self.waste.iter().map(|c| (PileId::Waste, c));

        tableau.chain(foundations).chain(stock).chain(waste)
    }

    /// All four foundations hold a full suit.
    ///
    /// This is a read-only query; the engine has no terminal state and
    /// keeps applying the same rules afterwards.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(FoundationPile::is_complete)
    }

    // === Mutable access (engine only) ===

    pub(crate) fn tableau_mut(&mut self, column: TableauIndex) -> &mut TableauPile {
        &mut self.tableau[column.get()]
    }

    pub(crate) fn foundation_mut(&mut self, index: FoundationIndex) -> &mut FoundationPile {
        &mut self.foundations[index.get()]
    }

    /// Stock and waste together, for draw and recycle.
    pub(crate) fn stock_and_waste_mut(&mut self) -> (&mut StockPile, &mut WastePile) {
        (&mut self.stock, &mut self.waste)
    }

    pub(crate) fn waste_mut(&mut self) -> &mut WastePile {
        &mut self.waste
    }

    pub(crate) fn stock_mut(&mut self) -> &mut StockPile {
        &mut self.stock
    }

    // === Invariants ===

    /// Verify the closed-system and orientation invariants.
    ///
    /// A failure here means an engine bug, not a user error.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(InvariantViolation::WrongCardCount(count));
        }

        let mut seen = FxHashSet::default();
        for (pile, card) in self.cards() {
            if !seen.insert(card.identity()) {
                return Err(InvariantViolation::DuplicateCard { card: *card, pile });
            }
            match pile {
                PileId::Stock if card.face_up => {
                    return Err(InvariantViolation::FaceUpInStock(*card));
                }
                PileId::Waste if !card.face_up => {
                    return Err(InvariantViolation::FaceDownInWaste(*card));
                }
                PileId::Foundation(_) if !card.face_up => {
                    return Err(InvariantViolation::FaceDownOnFoundation(*card));
                }
                _ => {}
            }
        }

        for column in TableauIndex::all() {
            if self.tableau(column).top().is_some_and(|c| !c.face_up) {
                return Err(InvariantViolation::FaceDownTop(column));
            }
        }

        Ok(())
    }
}

/// A broken engine invariant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The layout does not hold exactly 52 cards.
    WrongCardCount(usize),
    /// A (rank, suit) pair appears more than once.
    DuplicateCard { card: Card, pile: PileId },
    FaceUpInStock(Card),
    FaceDownInWaste(Card),
    FaceDownOnFoundation(Card),
    /// A non-empty tableau column has a face-down top card.
    FaceDownTop(TableauIndex),
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongCardCount(n) => write!(f, "layout holds {n} cards, expected {DECK_SIZE}"),
            Self::DuplicateCard { card, pile } => write!(f, "duplicate card {card} in {pile}"),
            Self::FaceUpInStock(card) => write!(f, "face-up card {card} in stock"),
            Self::FaceDownInWaste(card) => write!(f, "face-down card {card} in waste"),
            Self::FaceDownOnFoundation(card) => write!(f, "face-down card {card} on foundation"),
            Self::FaceDownTop(column) => write!(f, "tableau {} has a face-down top card", column.get()),
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Deck, Rank, Suit};

    /// All 52 cards: the stock holds everything, face-down.
    fn all_in_stock() -> GameState {
        GameState::with_piles(Default::default(), Default::default(), Deck::standard().into_cards(), vec![])
    }

    #[test]
    fn test_empty_state() {
        let state = GameState::empty();

        assert_eq!(state.card_count(), 0);
        assert!(state.stock().is_empty());
        assert!(state.waste().is_empty());
        assert!(!state.is_won());
    }

    #[test]
    fn test_invariants_hold_for_full_stock() {
        let state = all_in_stock();

        assert_eq!(state.card_count(), 52);
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_invariants_wrong_count() {
        let state = GameState::empty();
        assert_eq!(state.check_invariants(), Err(InvariantViolation::WrongCardCount(0)));
    }

    #[test]
    fn test_invariants_duplicate() {
        let mut stock = Deck::standard().into_cards();
        stock[0] = stock[1];
        let state = GameState::with_piles(Default::default(), Default::default(), stock, vec![]);

        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::DuplicateCard { pile: PileId::Stock, .. })
        ));
    }

    #[test]
    fn test_invariants_orientation() {
        let mut stock = Deck::standard().into_cards();
        let mut waste_card = stock.pop().unwrap();
        waste_card.face_up = false;
        let state = GameState::with_piles(Default::default(), Default::default(), stock, vec![waste_card]);

        assert_eq!(state.check_invariants(), Err(InvariantViolation::FaceDownInWaste(waste_card)));
    }

    #[test]
    fn test_invariants_face_down_top() {
        let mut stock = Deck::standard().into_cards();
        let hidden = stock.pop().unwrap();
        let mut tableau: [Vec<Card>; 7] = Default::default();
        tableau[3].push(hidden);
        let state = GameState::with_piles(tableau, Default::default(), stock, vec![]);

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::FaceDownTop(TableauIndex::new(3).unwrap()))
        );
    }

    #[test]
    fn test_is_won() {
        let foundations = Suit::ALL.map(|suit| Rank::ALL.iter().map(|&r| Card::face_up(r, suit)).collect());
        let state = GameState::with_piles(Default::default(), foundations, vec![], vec![]);

        assert!(state.is_won());
        assert_eq!(state.check_invariants(), Ok(()));
    }

    #[test]
    fn test_pile_len_and_cards() {
        let state = all_in_stock();

        assert_eq!(state.pile_len(PileId::Stock), 52);
        assert_eq!(state.pile_len(PileId::Waste), 0);
        assert!(state.cards().all(|(pile, _)| pile == PileId::Stock));
    }

    #[test]
    fn test_snapshot_serialization() {
        let state = all_in_stock();

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
