/// card.rs has value, suit, and card parsing.
mod card;
/// Everything in there should be public.
pub use self::card::{parse_card, parse_cards, Card, Suit, Value};

/// A set of cards packed into a u64.
mod card_bit_set;
/// Export `CardBitSet` and its iterator.
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Deck is the remaining cards, FlatDeck is what gets sampled.
mod deck;
/// Export `Deck` and `FlatDeck`
pub use self::deck::{Deck, FlatDeck};

/// Iterate over every k sized group of cards.
mod card_iter;
/// Export `CardIter`
pub use self::card_iter::CardIter;

/// The error type shared by the whole crate.
mod error;
/// Export `HiLoError` and the crate `Result`.
pub use self::error::{HiLoError, Result};
