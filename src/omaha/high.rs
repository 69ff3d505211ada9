use std::fmt;

use crate::core::{Card, CardBitSet, Value};

use super::low::LowRank;

/// The strength of a five card high hand.
///
/// Each variant carries exactly the values needed to break ties inside
/// its category, most significant first. The derived `Ord` compares the
/// variant first (declaration order is the poker order) and then the
/// fields in declaration order, so comparing two `HighRank`s is the poker
/// comparison, kickers included. Equal ranks are genuinely equal hands.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::parse_cards;
/// use hilo_equity::omaha::evaluate_high;
///
/// let wheel = evaluate_high(&parse_cards("Ad 2c 3s 4h 5s").unwrap());
/// let six_high = evaluate_high(&parse_cards("2c 3s 4h 5s 6d").unwrap());
/// assert!(wheel < six_high);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HighRank {
    /// No matches. All five values, highest first.
    HighCard([Value; 5]),
    /// One Card matches another.
    OnePair { pair: Value, kickers: [Value; 3] },
    /// Two different pair of matching cards.
    TwoPair {
        high: Value,
        low: Value,
        kicker: Value,
    },
    /// Three of the same value.
    ThreeOfAKind { trips: Value, kickers: [Value; 2] },
    /// Five cards in a sequence, by the top card.
    /// The wheel (A-2-3-4-5) is five high.
    Straight(Value),
    /// Five cards of the same suit.
    Flush([Value; 5]),
    /// Three of one value and two of another value.
    FullHouse { trips: Value, pair: Value },
    /// Four of the same value.
    FourOfAKind { quads: Value, kicker: Value },
    /// Five cards in a sequence all for the same suit.
    StraightFlush(Value),
}

/// The nine hand categories without any tie break detail.
///
/// This is useful for display and for counting how often each kind of
/// hand shows up.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    /// Human readable name of the category.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<HighRank> for HandCategory {
    fn from(rank: HighRank) -> Self {
        match rank {
            HighRank::HighCard(_) => Self::HighCard,
            HighRank::OnePair { .. } => Self::OnePair,
            HighRank::TwoPair { .. } => Self::TwoPair,
            HighRank::ThreeOfAKind { .. } => Self::ThreeOfAKind,
            HighRank::Straight(_) => Self::Straight,
            HighRank::Flush(_) => Self::Flush,
            HighRank::FullHouse { .. } => Self::FullHouse,
            HighRank::FourOfAKind { .. } => Self::FourOfAKind,
            HighRank::StraightFlush(_) => Self::StraightFlush,
        }
    }
}

impl HighRank {
    pub fn category(&self) -> HandCategory {
        (*self).into()
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of values find the top card of a straight.
/// Wheel is the lowest (five high), broadway is the highest.
///
/// Returns None if the values don't make a straight.
fn rank_straight(value_set: u32) -> Option<Value> {
    // A bit survives only if it and the four bits below it are all set.
    //
    //       0000111110000
    //       0001111100000   << 1
    //       0011111000000   << 2
    //       0111110000000   << 3
    //       1111100000000   << 4
    //       -------------
    //       0000100000000
    let top =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    if top != 0 {
        Some(Value::from_u8((31 - top.leading_zeros()) as u8))
    } else if value_set & WHEEL == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// Anything that holds exactly five cards can be ranked as a high hand
/// and as a low hand. There are implementations for slices, vectors,
/// arrays, and `CardBitSet`.
///
/// Ranking something that isn't five distinct cards is a logic error;
/// debug builds will panic.
pub trait Rankable {
    /// The five cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank these five cards as a high hand.
    fn rank_high(&self) -> HighRank {
        let mut suit_set: u32 = 0;
        let mut value_set: u32 = 0;
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut values = [Value::Two; 5];
        let mut n = 0;

        for c in self.cards() {
            debug_assert!(n < 5, "A high hand is exactly five cards");
            values[n.min(4)] = c.value;
            n += 1;
            suit_set |= 1 << c.suit as u32;
            value_set |= 1 << c.value as u32;
            value_to_count[c.value as usize] += 1;
        }
        debug_assert_eq!(5, n, "A high hand is exactly five cards");

        // Biggest group first, then highest value. After this the pattern
        // of each category is fixed: a full house is TTTPP, two pair
        // HHLLK, and so on.
        values.sort_unstable_by(|a, b| {
            (value_to_count[*b as usize], *b).cmp(&(value_to_count[*a as usize], *a))
        });
        let most = value_to_count[values[0] as usize];

        // The number of distinct values decides almost everything.
        match (value_set.count_ones(), most) {
            (5, _) => {
                let is_flush = suit_set.count_ones() == 1;
                match (rank_straight(value_set), is_flush) {
                    (Some(top), true) => HighRank::StraightFlush(top),
                    (None, true) => HighRank::Flush(values),
                    (Some(top), false) => HighRank::Straight(top),
                    (None, false) => HighRank::HighCard(values),
                }
            }
            (4, _) => HighRank::OnePair {
                pair: values[0],
                kickers: [values[2], values[3], values[4]],
            },
            (3, 3) => HighRank::ThreeOfAKind {
                trips: values[0],
                kickers: [values[3], values[4]],
            },
            (3, _) => HighRank::TwoPair {
                high: values[0],
                low: values[2],
                kicker: values[4],
            },
            (2, 4) => HighRank::FourOfAKind {
                quads: values[0],
                kicker: values[4],
            },
            (2, _) => HighRank::FullHouse {
                trips: values[0],
                pair: values[3],
            },
            _ => unreachable!("five distinct cards have at least two values"),
        }
    }

    /// Rank these five cards as an 8-or-better low.
    /// `None` when they don't qualify.
    fn rank_low(&self) -> Option<LowRank> {
        LowRank::from_cards(self.cards())
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card; 5] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

/// Score exactly five cards as a high hand.
pub fn evaluate_high(cards: &[Card]) -> HighRank {
    cards.rank_high()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_cards, Suit};

    fn rank(s: &str) -> HighRank {
        evaluate_high(&parse_cards(s).unwrap())
    }

    #[test]
    fn test_cmp() {
        assert!(HighRank::HighCard([Value::Ace; 5]) < HighRank::StraightFlush(Value::Five));
        assert!(HighRank::Straight(Value::Ace) < HighRank::Flush([Value::Two; 5]));
        assert!(HighRank::Straight(Value::Five) < HighRank::Straight(Value::Six));
    }

    #[test]
    fn test_category_order() {
        let hands = [
            "Ad 8h 9c Tc 5c",
            "Ad Ac 9d 8c Ts",
            "Ad Ac 9d 9c Ts",
            "2c 2s 2h 5s 6d",
            "2c 3s 4h 5s 6d",
            "Ad 8d 9d Td 5d",
            "Ad Ac 9d 9c 9s",
            "Ad Ac As Ah Ts",
            "Ad 2d 3d 4d 5d",
        ];
        let ranks: Vec<HighRank> = hands.iter().map(|h| rank(h)).collect();
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be < {:?}", pair[0], pair[1]);
        }
        let categories: Vec<HandCategory> = ranks.iter().map(HighRank::category).collect();
        assert_eq!(
            vec![
                HandCategory::HighCard,
                HandCategory::OnePair,
                HandCategory::TwoPair,
                HandCategory::ThreeOfAKind,
                HandCategory::Straight,
                HandCategory::Flush,
                HandCategory::FullHouse,
                HandCategory::FourOfAKind,
                HandCategory::StraightFlush,
            ],
            categories
        );
    }

    #[test]
    fn test_high_card() {
        assert_eq!(
            HighRank::HighCard([Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five]),
            rank("Ad 8h 9c Tc 5c")
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(HighRank::Straight(Value::Five), rank("Ad 2c 3s 4h 5s"));
        assert_eq!(HighRank::Straight(Value::Six), rank("2c 3s 4h 5s 6d"));
        assert_eq!(HighRank::Straight(Value::Ace), rank("Tc Js Qh Ks Ad"));
    }

    #[test]
    fn test_almost_wheel_is_not_straight() {
        assert!(matches!(rank("Ad 2c 3s 4h 6d"), HighRank::HighCard(_)));
        // Wrapping around the ace isn't a straight.
        assert!(matches!(rank("Qd Kc As 2h 3d"), HighRank::HighCard(_)));
    }

    #[test]
    fn test_steel_wheel_is_lowest_straight_flush() {
        let steel_wheel = rank("Ah 2h 3h 4h 5h");
        assert_eq!(HighRank::StraightFlush(Value::Five), steel_wheel);
        assert!(steel_wheel < rank("2h 3h 4h 5h 6h"));
        assert!(steel_wheel > rank("Ac Ad As Ah Kd"));
    }

    #[test]
    fn test_flush() {
        assert_eq!(
            HighRank::Flush([Value::Ace, Value::Ten, Value::Nine, Value::Eight, Value::Five]),
            rank("Ad 8d 9d Td 5d")
        );
        assert!(rank("Ad 8d 9d Td 5d") > rank("Kd Qd Jd 9d 7d"));
    }

    #[test]
    fn test_full_house() {
        assert_eq!(
            HighRank::FullHouse {
                trips: Value::Nine,
                pair: Value::Ace
            },
            rank("Ad Ac 9d 9c 9s")
        );
        // Trips decide before the pair.
        assert!(rank("Td Tc Ts 2c 2s") > rank("9d 9c 9s Ac As"));
        assert!(rank("Td Tc Ts 3c 3s") > rank("Th Tc Ts 2c 2s"));
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(
            HighRank::TwoPair {
                high: Value::Ace,
                low: Value::Nine,
                kicker: Value::Ten
            },
            rank("Ad Ac 9d 9c Ts")
        );
        assert!(rank("Ad Ac Kd Kc 2s") > rank("As Ah Qd Qc Ks"));
        assert!(rank("Ad Ac Kd Kc 3s") > rank("As Ah Ks Kh 2s"));
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(
            HighRank::ThreeOfAKind {
                trips: Value::Two,
                kickers: [Value::Six, Value::Five]
            },
            rank("2c 2s 2h 5s 6d")
        );
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(
            HighRank::OnePair {
                pair: Value::Ace,
                kickers: [Value::Ten, Value::Nine, Value::Eight]
            },
            rank("Ad Ac 9d 8c Ts")
        );
        assert!(rank("As Ah Kd Qc Js") > rank("Ks Kh Ad Qc Js"));
        assert!(rank("As Ah Kd Qc Js") > rank("Ad Ac Kh Qd Ts"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(
            HighRank::FourOfAKind {
                quads: Value::Ace,
                kicker: Value::Ten
            },
            rank("Ad Ac As Ah Ts")
        );
        assert!(rank("Ad Ac As Ah Ts") > rank("Ks Kc Kd Kh As"));
    }

    #[test]
    fn test_identical_values_tie() {
        assert_eq!(rank("As Kh 9d 7c 4s"), rank("Ad Ks 9h 7d 4c"));
        assert_eq!(rank("Ts Jh Qd Kc As"), rank("Td Js Qh Kd Ac"));
    }

    #[test]
    fn test_rankable_implementations_agree() {
        let cards = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Queen, Suit::Spade),
            Card::new(Value::Jack, Suit::Spade),
            Card::new(Value::Ten, Suit::Spade),
        ];
        let set: CardBitSet = cards[..].into();
        assert_eq!(HighRank::StraightFlush(Value::Ace), cards.rank_high());
        assert_eq!(cards.rank_high(), set.rank_high());
        assert_eq!(cards.rank_high(), cards.to_vec().rank_high());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!("Full House", HandCategory::FullHouse.to_string());
        assert_eq!("Straight Flush", HandCategory::StraightFlush.label());
    }
}
