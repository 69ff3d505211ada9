use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Units in one whole pot.
///
/// 5040 = 2 x lcm(1..=10): half a pot divides evenly between any number of
/// winners up to ten, so every share is an exact integer.
pub const POT_UNITS: u64 = 5040;

/// An exact fraction of one pot, counted in `1 / POT_UNITS` units.
///
/// Shares added up over many trials stay exact, which keeps the scoop /
/// three quarter / split / quarter boundaries free of floating point
/// rounding.
///
/// # Examples
///
/// ```
/// use hilo_equity::omaha::PotShare;
///
/// let share = PotShare::HALF + PotShare::HALF.divide(2);
/// assert_eq!(PotShare::THREE_QUARTERS, share);
/// assert_eq!(0.75, share.as_fraction());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PotShare(u64);

impl PotShare {
    pub const ZERO: Self = Self(0);
    pub const QUARTER: Self = Self(POT_UNITS / 4);
    pub const HALF: Self = Self(POT_UNITS / 2);
    pub const THREE_QUARTERS: Self = Self(POT_UNITS / 4 * 3);
    pub const WHOLE: Self = Self(POT_UNITS);

    /// Raw number of `1 / POT_UNITS` units.
    pub fn units(&self) -> u64 {
        self.0
    }

    /// Split this share evenly between `ways` winners.
    ///
    /// # Panics
    ///
    /// If `ways` is zero.
    pub fn divide(self, ways: usize) -> Self {
        let ways = ways as u64;
        debug_assert_eq!(0, self.0 % ways, "{} units don't split {} ways", self.0, ways);
        Self(self.0 / ways)
    }

    /// The share as a fraction of pots. Over many trials this is how many
    /// pots were won.
    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / POT_UNITS as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for PotShare {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for PotShare {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for PotShare {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for PotShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.as_fraction())
    }
}

/// What a single trial meant for a single player.
///
/// Exactly one applies per player per trial and it's decided only by the
/// share of the pot won:
///
/// | share           | outcome        |
/// |-----------------|----------------|
/// | 1               | `Scoop`        |
/// | (1/2, 1)        | `ThreeQuarter` |
/// | 1/2             | `Split`        |
/// | (0, 1/2)        | `Quarter`      |
/// | 0               | `None`         |
///
/// The largest share short of the whole pot is exactly 3/4 (one pot alone
/// plus half of the other), so 3/4 is always a `ThreeQuarter` and never a
/// `Quarter`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotOutcome {
    Scoop,
    ThreeQuarter,
    Split,
    Quarter,
    None,
}

impl PotOutcome {
    pub fn classify(share: PotShare) -> Self {
        if share == PotShare::WHOLE {
            Self::Scoop
        } else if share > PotShare::HALF {
            Self::ThreeQuarter
        } else if share == PotShare::HALF {
            Self::Split
        } else if share.is_zero() {
            Self::None
        } else {
            Self::Quarter
        }
    }
}

/// One player's result for one trial.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub hi_winner: bool,
    pub lo_winner: bool,
    /// Share won from the high pot.
    pub hi_share: PotShare,
    /// Share won from the low pot.
    pub lo_share: PotShare,
    pub outcome: PotOutcome,
}

impl TrialOutcome {
    /// Everything won this trial.
    pub fn share(&self) -> PotShare {
        self.hi_share + self.lo_share
    }
}

/// How the pot gets divided for one trial, given how many players tied for
/// the best high and the best low.
///
/// When any low qualifies the pot is cut in half, otherwise the high hand
/// plays for all of it. Each half is shared evenly between its winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotSplit {
    hi_winners: usize,
    lo_winners: usize,
}

impl PotSplit {
    /// `hi_winners` must be at least one, there's always a best high hand.
    pub fn new(hi_winners: usize, lo_winners: usize) -> Self {
        debug_assert!(hi_winners > 0, "Someone always wins the high");
        Self {
            hi_winners,
            lo_winners,
        }
    }

    pub fn has_low(&self) -> bool {
        self.lo_winners > 0
    }

    pub fn hi_pot(&self) -> PotShare {
        if self.has_low() {
            PotShare::HALF
        } else {
            PotShare::WHOLE
        }
    }

    pub fn lo_pot(&self) -> PotShare {
        if self.has_low() {
            PotShare::HALF
        } else {
            PotShare::ZERO
        }
    }

    /// What each high winner takes.
    pub fn hi_share(&self) -> PotShare {
        self.hi_pot().divide(self.hi_winners)
    }

    /// What each low winner takes.
    pub fn lo_share(&self) -> PotShare {
        if self.has_low() {
            self.lo_pot().divide(self.lo_winners)
        } else {
            PotShare::ZERO
        }
    }

    /// Settle the trial for one player.
    pub fn settle(&self, hi_winner: bool, lo_winner: bool) -> TrialOutcome {
        let hi_share = if hi_winner {
            self.hi_share()
        } else {
            PotShare::ZERO
        };
        let lo_share = if lo_winner {
            self.lo_share()
        } else {
            PotShare::ZERO
        };
        TrialOutcome {
            hi_winner,
            lo_winner,
            hi_share,
            lo_share,
            outcome: PotOutcome::classify(hi_share + lo_share),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_split_is_exact() {
        for ways in 1..=10 {
            let each = PotShare::HALF.divide(ways);
            let total: PotShare = (0..ways).map(|_| each).sum();
            assert_eq!(PotShare::HALF, total);
            let each = PotShare::WHOLE.divide(ways);
            let total: PotShare = (0..ways).map(|_| each).sum();
            assert_eq!(PotShare::WHOLE, total);
        }
    }

    #[test]
    fn test_no_low_whole_pot() {
        let split = PotSplit::new(1, 0);
        let o = split.settle(true, false);
        assert_eq!(PotShare::WHOLE, o.share());
        assert_eq!(PotOutcome::Scoop, o.outcome);
        assert_eq!(PotOutcome::None, split.settle(false, false).outcome);
    }

    #[test]
    fn test_scoop_both_halves() {
        let o = PotSplit::new(1, 1).settle(true, true);
        assert_eq!(PotShare::WHOLE, o.share());
        assert_eq!(PotOutcome::Scoop, o.outcome);
    }

    #[test]
    fn test_split_high_and_low() {
        let split = PotSplit::new(1, 1);
        let hi = split.settle(true, false);
        let lo = split.settle(false, true);
        assert_eq!(PotOutcome::Split, hi.outcome);
        assert_eq!(PotOutcome::Split, lo.outcome);
        assert_eq!(PotShare::WHOLE, hi.share() + lo.share());
    }

    #[test]
    fn test_chopped_high_without_low_is_split() {
        let o = PotSplit::new(2, 0).settle(true, false);
        assert_eq!(PotShare::HALF, o.share());
        assert_eq!(PotOutcome::Split, o.outcome);
    }

    #[test]
    fn test_three_way_high_without_low_is_quarter() {
        let o = PotSplit::new(3, 0).settle(true, false);
        assert_eq!(PotShare::WHOLE.divide(3), o.share());
        assert_eq!(PotOutcome::Quarter, o.outcome);
    }

    #[test]
    fn test_quartered() {
        // High alone, low chopped two ways.
        let split = PotSplit::new(1, 2);
        let winner = split.settle(true, true);
        let quartered = split.settle(false, true);
        assert_eq!(PotShare::THREE_QUARTERS, winner.share());
        assert_eq!(PotOutcome::ThreeQuarter, winner.outcome);
        assert_eq!(PotShare::QUARTER, quartered.share());
        assert_eq!(PotOutcome::Quarter, quartered.outcome);
    }

    #[test]
    fn test_three_quarter_boundary() {
        assert_eq!(
            PotOutcome::ThreeQuarter,
            PotOutcome::classify(PotShare::THREE_QUARTERS)
        );
        assert_eq!(PotOutcome::Split, PotOutcome::classify(PotShare::HALF));
        assert_eq!(PotOutcome::Quarter, PotOutcome::classify(PotShare::QUARTER));
        // High alone, low chopped three ways is between a half and three quarters.
        let o = PotSplit::new(1, 3).settle(true, true);
        assert!(o.share() > PotShare::HALF && o.share() < PotShare::THREE_QUARTERS);
        assert_eq!(PotOutcome::ThreeQuarter, o.outcome);
    }

    #[test]
    fn test_both_chopped_is_split() {
        // Same hand both ways as one other player.
        let o = PotSplit::new(2, 2).settle(true, true);
        assert_eq!(PotShare::HALF, o.share());
        assert_eq!(PotOutcome::Split, o.outcome);
    }

    #[test]
    fn test_shares_add_up_to_whole_pot() {
        for hi in 1..=9 {
            for lo in 0..=9 {
                let split = PotSplit::new(hi, lo);
                let total = split.hi_share().units() * hi as u64
                    + split.lo_share().units() * lo as u64;
                assert_eq!(POT_UNITS, total);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!("0.2500", PotShare::QUARTER.to_string());
    }
}
