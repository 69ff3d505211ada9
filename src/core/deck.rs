use rand::seq::SliceRandom;
use rand::Rng;

use super::{Card, CardBitSet};

/// The cards that haven't been assigned to a hand or the board.
///
/// A `Deck` starts out as all 52 cards. Known cards are removed from it,
/// and whatever is left is what the simulation deals the rest of the
/// board from. Every computation owns its own deck; nothing about a deck
/// is global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(CardBitSet);

impl Deck {
    /// A deck with no cards in it.
    pub fn empty() -> Self {
        Self(CardBitSet::new())
    }

    /// Put all 52 cards back.
    pub fn reset(&mut self) {
        self.0 = CardBitSet::default();
    }

    /// Remove a card. Returns `false` if it had already been removed.
    pub fn remove(&mut self, card: Card) -> bool {
        self.0.remove(card)
    }

    /// Remove every card of `cards`. Returns the first card that wasn't in
    /// the deck, which is how duplicated input is found.
    pub fn remove_all<I>(&mut self, cards: I) -> Option<Card>
    where
        I: IntoIterator<Item = Card>,
    {
        cards.into_iter().find(|&card| !self.remove(card))
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(card)
    }

    pub fn len(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The remaining cards as a set.
    pub fn cards(&self) -> CardBitSet {
        self.0
    }

    /// Flatten into a vector that can be sampled from.
    pub fn flatten(&self) -> FlatDeck {
        self.into()
    }
}

impl Default for Deck {
    /// A full 52 card deck.
    fn default() -> Self {
        Self(CardBitSet::default())
    }
}

/// A deck laid out in a `Vec` so that random cards can be picked
/// quickly. Sampling never removes cards, each call is an independent
/// draw without replacement from the full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatDeck {
    cards: Vec<Card>,
}

impl FlatDeck {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pick `n` distinct cards uniformly at random.
    ///
    /// This is a partial Fisher-Yates shuffle: only `n` swaps are done and
    /// the order of the deck afterwards doesn't matter for the next draw.
    ///
    /// # Panics
    ///
    /// If `n` is larger than the number of cards in the deck.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        assert!(n <= self.cards.len(), "Can't draw {n} cards from the deck");
        let (picked, _rest) = self.cards.partial_shuffle(rng, n);
        picked
    }
}

impl From<&Deck> for FlatDeck {
    fn from(deck: &Deck) -> Self {
        Self {
            cards: deck.0.iter().collect(),
        }
    }
}

impl std::ops::Deref for FlatDeck {
    type Target = [Card];
    fn deref(&self) -> &[Card] {
        &self.cards
    }
}
