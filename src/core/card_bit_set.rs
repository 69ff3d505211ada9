use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::{Card, Suit, Value};

const FULL_DECK: u64 = (1 << 52) - 1;

/// A set of cards stored in the bits of a single `u64`.
///
/// Card `value` of `suit` lives at bit `suit * 13 + value`. That makes
/// set algebra (union for a hand plus board, difference for the remaining
/// deck) a single instruction, and the set is `Copy`.
///
/// The default value is the full 52 card deck. Use `CardBitSet::new` for
/// an empty set.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::{Card, CardBitSet, Suit, Value};
///
/// let mut set = CardBitSet::new();
/// let card = Card::new(Value::Ace, Suit::Spade);
/// set.insert(card);
/// assert!(set.contains(card));
/// assert_eq!(1, set.count());
///
/// let rest = CardBitSet::default() ^ set;
/// assert_eq!(51, rest.count());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    fn bit(card: Card) -> u64 {
        1 << (card.suit as u64 * 13 + card.value as u64)
    }

    /// Add a card. Returns `true` if the card wasn't there before.
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards |= Self::bit(card);
        !had
    }

    /// Remove a card. Returns `true` if the card was there.
    pub fn remove(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards &= !Self::bit(card);
        had
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards & Self::bit(card) != 0
    }

    /// How many cards are in the set.
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// Iterate the cards from the lowest bit up.
    pub fn iter(&self) -> CardBitSetIter {
        CardBitSetIter(self.cards)
    }
}

impl Default for CardBitSet {
    fn default() -> Self {
        Self { cards: FULL_DECK }
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|c| c.to_string()))
            .finish()
    }
}

impl BitOr for CardBitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOrAssign for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitAndAssign for CardBitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.cards &= rhs.cards;
    }
}

impl BitXor for CardBitSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl BitXorAssign for CardBitSet {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.cards ^= rhs.cards;
    }
}

/// Complement within the 52 card deck.
impl Not for CardBitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self {
            cards: !self.cards & FULL_DECK,
        }
    }
}

impl From<Card> for CardBitSet {
    fn from(card: Card) -> Self {
        Self {
            cards: Self::bit(card),
        }
    }
}

impl From<&[Card]> for CardBitSet {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterator over the cards of a `CardBitSet`.
#[derive(Debug, Clone)]
pub struct CardBitSetIter(u64);

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        // Clear the lowest set bit.
        self.0 &= self.0 - 1;
        Some(Card::new(Value::from_u8(idx % 13), Suit::from_u8(idx / 13)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}

impl IntoIterator for &CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.iter()
    }
}
