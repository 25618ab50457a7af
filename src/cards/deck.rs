//! The 52-card deck and its shuffle.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// An ordered deck of cards. The top of the deck is the last element.
///
/// ## Usage
///
/// ```
/// use klondike_engine::cards::Deck;
/// use klondike_engine::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut rng);
///
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards face-down, suit-major then rank-minor
    /// (hearts A..K, diamonds A..K, clubs A..K, spades A..K).
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Wrap an arbitrary card sequence (last element = top).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle in place with Fisher–Yates.
    ///
    /// Walks `i` from the last index down to 1 and swaps with a uniformly
    /// chosen `j` in `0..=i`, so every permutation is equally likely.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        shuffle_slice(&mut self.cards, rng);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Fisher–Yates over any slice.
pub fn shuffle_slice<T>(items: &mut [T], rng: &mut GameRng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_index(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.cards().iter().map(Card::identity).collect();
        assert_eq!(unique.len(), DECK_SIZE);
        assert!(deck.cards().iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_standard_deck_order() {
        let deck = Deck::standard();

        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.cards()[12], Card::new(Rank::King, Suit::Hearts));
        assert_eq!(deck.cards()[13], Card::new(Rank::Ace, Suit::Diamonds));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Spades));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        assert_ne!(deck, Deck::standard());

        let mut shuffled: Vec<_> = deck.cards().iter().map(Card::identity).collect();
        let mut original: Vec<_> = Deck::standard().cards().iter().map(Card::identity).collect();
        shuffled.sort();
        original.sort();
        assert_eq!(shuffled, original);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle(&mut GameRng::new(9));
        b.shuffle(&mut GameRng::new(9));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_small_slices() {
        let mut rng = GameRng::new(1);

        let mut empty: [u8; 0] = [];
        shuffle_slice(&mut empty, &mut rng);

        let mut one = [5];
        shuffle_slice(&mut one, &mut rng);
        assert_eq!(one, [5]);
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::standard();

        assert_eq!(deck.draw(), Some(Card::new(Rank::King, Suit::Spades)));
        assert_eq!(deck.len(), 51);
    }
}
