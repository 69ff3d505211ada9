use crate::core::{Card, CardBitSet};

/// Iterate every way of picking `num_cards` cards out of a slice.
///
/// Combinations come out in lexicographic order of their positions in
/// the slice, each one as a `CardBitSet`, so they can be or-ed together
/// with other sets (hole pairs with board triples for instance).
#[derive(Debug)]
pub struct CardIter<'a> {
    /// All the cards that can be picked.
    possible_cards: &'a [Card],

    /// Positions of the next combination to hand out, `None` once done.
    idx: Option<Vec<usize>>,
}

impl CardIter<'_> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each set. Asking
    /// for zero cards, or for more cards than there are, yields nothing.
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter<'_> {
        let idx = if num_cards == 0 || num_cards > possible_cards.len() {
            None
        } else {
            Some((0..num_cards).collect())
        };
        CardIter {
            possible_cards,
            idx,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = CardBitSet;

    fn next(&mut self) -> Option<CardBitSet> {
        let cards = self.possible_cards;
        let idx = self.idx.as_mut()?;
        let result: CardBitSet = idx.iter().map(|&i| cards[i]).collect();

        // Advance: find the right most position that can still move
        // forward, bump it, and reset everything after it.
        let n = cards.len();
        let k = idx.len();
        match (0..k).rev().find(|&pos| idx[pos] < n - k + pos) {
            Some(pos) => {
                idx[pos] += 1;
                for next in pos + 1..k {
                    idx[next] = idx[next - 1] + 1;
                }
            }
            None => self.idx = None,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_cards, Deck, Suit, Value};

    #[test]
    fn test_iter_one() {
        let cards = [Card::new(Value::Two, Suit::Spade)];

        for combo in CardIter::new(&cards, 1) {
            assert_eq!(1, combo.count());
        }
        assert_eq!(1, CardIter::new(&cards, 1).count());
    }

    #[test]
    fn test_iter_two_of_three() {
        let cards = parse_cards("2s 3s 4s").unwrap();

        // Make sure that we get the correct number back.
        assert_eq!(3, CardIter::new(&cards, 2).count());

        // Make sure that everything has two cards.
        for combo in CardIter::new(&cards, 2) {
            assert_eq!(2, combo.count());
        }
    }

    #[test]
    fn test_omaha_counts() {
        let five = parse_cards("As Ks Qs Js Ts").unwrap();
        let four = parse_cards("2h 3h 4h 5h").unwrap();
        assert_eq!(10, CardIter::new(&five, 2).count());
        assert_eq!(10, CardIter::new(&five, 3).count());
        assert_eq!(6, CardIter::new(&four, 2).count());
    }

    #[test]
    fn test_iter_all_distinct() {
        let cards = parse_cards("As Ks Qs Js Ts 9s").unwrap();
        let combos: Vec<CardBitSet> = CardIter::new(&cards, 3).collect();
        assert_eq!(20, combos.len());
        for (i, a) in combos.iter().enumerate() {
            for b in &combos[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_iter_degenerate_sizes() {
        let cards = parse_cards("As Ks").unwrap();
        assert_eq!(0, CardIter::new(&cards, 0).count());
        assert_eq!(0, CardIter::new(&cards, 3).count());
        assert_eq!(1, CardIter::new(&cards, 2).count());
    }

    #[test]
    fn test_iter_deck() {
        let cards: Vec<Card> = Deck::default().cards().into_iter().collect();
        assert_eq!(2_598_960, CardIter::new(&cards, 5).count());
    }

    #[test]
    fn test_iter_bitwise_or_combinations() {
        let cards = parse_cards("2s 3s 4s").unwrap();
        let base: CardBitSet = Card::new(Value::Five, Suit::Heart).into();

        for combo in CardIter::new(&cards, 2) {
            let combined = base | combo;
            assert_eq!(3, combined.count());
            assert!(combined.contains(Card::new(Value::Five, Suit::Heart)));
        }
    }
}
