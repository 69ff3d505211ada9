use std::fmt;

use crate::core::Card;

/// A qualifying 8-or-better low hand.
///
/// Holds the five low values (ace = 1) sorted from the highest down. The
/// derived `Ord` compares them left to right, so a *smaller* `LowRank` is
/// a *better* low: the hand with the lower top card wins and ties fall
/// through to the next card. `A-2-3-4-5` is the minimum and `8-7-6-5-4`
/// the maximum.
///
/// # Examples
///
/// ```
/// use hilo_equity::core::parse_cards;
/// use hilo_equity::omaha::evaluate_low;
///
/// let wheel = evaluate_low(&parse_cards("Ad 2c 3s 4h 5s").unwrap()).unwrap();
/// let six_four = evaluate_low(&parse_cards("Ad 2c 3s 4h 6s").unwrap()).unwrap();
/// assert!(wheel < six_four);
/// assert_eq!(504_030_201, wheel.value());
///
/// assert!(evaluate_low(&parse_cards("Ad 2c 3s 4h 9s").unwrap()).is_none());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct LowRank([u8; 5]);

impl LowRank {
    /// The best possible low, the wheel.
    pub const BEST: Self = Self([5, 4, 3, 2, 1]);
    /// The worst qualifying low, eight seven.
    pub const WORST: Self = Self([8, 7, 6, 5, 4]);

    /// Rank five cards. `None` when any card is nine or higher or two
    /// cards share a value.
    pub fn from_cards<I>(cards: I) -> Option<Self>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut seen: u16 = 0;
        let mut values = [0u8; 5];
        let mut n = 0;

        for c in cards {
            if !c.value.is_low() {
                return None;
            }
            let low = c.value.low_value();
            let bit = 1 << low;
            if seen & bit != 0 {
                // A pair never makes a low.
                return None;
            }
            seen |= bit;
            debug_assert!(n < 5, "A low hand is exactly five cards");
            values[n.min(4)] = low;
            n += 1;
        }
        debug_assert_eq!(5, n, "A low hand is exactly five cards");

        values.sort_unstable_by(|a, b| b.cmp(a));
        Some(Self(values))
    }

    /// The low values, highest first.
    pub fn values(&self) -> [u8; 5] {
        self.0
    }

    /// The low as one number, two decimal digits per card from the top
    /// card down. `8-7-6-5-4` is `807060504`. Smaller is better.
    pub fn value(&self) -> u32 {
        self.0
            .iter()
            .fold(0u32, |acc, &v| acc * 100 + u32::from(v))
    }

    /// Is this low strictly better than `other`?
    pub fn beats(&self, other: &Self) -> bool {
        self < other
    }
}

impl fmt::Display for LowRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            match *v {
                1 => f.write_str("A")?,
                v => write!(f, "{v}")?,
            }
        }
        Ok(())
    }
}

/// Score exactly five cards as an 8-or-better low.
pub fn evaluate_low(cards: &[Card]) -> Option<LowRank> {
    LowRank::from_cards(cards.iter().copied())
}
