use std::ops::AddAssign;

use crate::omaha::pot::{PotOutcome, PotShare, TrialOutcome};

/// Raw per player counters, accumulated one trial at a time.
///
/// Counters only ever grow and two sets of stats merge by plain addition,
/// so batches can be counted independently and combined in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    /// Trials where this player had (or shared) the best high.
    pub hi_wins: u64,
    /// Trials where this player had (or shared) the best low.
    pub lo_wins: u64,
    pub scoops: u64,
    pub three_quarters: u64,
    pub splits: u64,
    pub quarters: u64,
    /// Total won from high pots.
    pub hi_value: PotShare,
    /// Total won from low pots.
    pub lo_value: PotShare,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one trial.
    pub fn record(&mut self, trial: &TrialOutcome) {
        if trial.hi_winner {
            self.hi_wins += 1;
        }
        if trial.lo_winner {
            self.lo_wins += 1;
        }
        match trial.outcome {
            PotOutcome::Scoop => self.scoops += 1,
            PotOutcome::ThreeQuarter => self.three_quarters += 1,
            PotOutcome::Split => self.splits += 1,
            PotOutcome::Quarter => self.quarters += 1,
            PotOutcome::None => {}
        }
        self.hi_value += trial.hi_share;
        self.lo_value += trial.lo_share;
    }

    /// Add everything from `other` into this.
    pub fn merge(&mut self, other: &PlayerStats) {
        self.hi_wins += other.hi_wins;
        self.lo_wins += other.lo_wins;
        self.scoops += other.scoops;
        self.three_quarters += other.three_quarters;
        self.splits += other.splits;
        self.quarters += other.quarters;
        self.hi_value += other.hi_value;
        self.lo_value += other.lo_value;
    }

    /// Everything won, high and low.
    pub fn total_value(&self) -> PotShare {
        self.hi_value + self.lo_value
    }

    /// Turn the counters into percentages of `trials`.
    pub fn finish(&self, trials: u64) -> PlayerEquity {
        let pct = |n: u64| percent(n as f64, trials);
        PlayerEquity {
            hi_wins: self.hi_wins,
            lo_wins: self.lo_wins,
            scoops: self.scoops,
            three_quarters: self.three_quarters,
            splits: self.splits,
            quarters: self.quarters,
            hi_win_rate: pct(self.hi_wins),
            lo_win_rate: pct(self.lo_wins),
            scoop_rate: pct(self.scoops),
            three_quarter_rate: pct(self.three_quarters),
            split_rate: pct(self.splits),
            quarter_rate: pct(self.quarters),
            hi_equity: percent(self.hi_value.as_fraction(), trials),
            lo_equity: percent(self.lo_value.as_fraction(), trials),
            equity: percent(self.total_value().as_fraction(), trials),
        }
    }
}

impl AddAssign<&PlayerStats> for PlayerStats {
    fn add_assign(&mut self, rhs: &PlayerStats) {
        self.merge(rhs);
    }
}

fn percent(n: f64, trials: u64) -> f64 {
    if trials == 0 {
        0.0
    } else {
        n / trials as f64 * 100.0
    }
}

/// Final numbers for one player. Every rate is a percent of all trials.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerEquity {
    pub hi_wins: u64,
    pub lo_wins: u64,
    pub scoops: u64,
    pub three_quarters: u64,
    pub splits: u64,
    pub quarters: u64,

    pub hi_win_rate: f64,
    pub lo_win_rate: f64,
    pub scoop_rate: f64,
    pub three_quarter_rate: f64,
    pub split_rate: f64,
    pub quarter_rate: f64,

    /// Share of all pots won through the high half.
    pub hi_equity: f64,
    /// Share of all pots won through the low half.
    pub lo_equity: f64,
    /// Expected share of the pot, in percent.
    pub equity: f64,
}
