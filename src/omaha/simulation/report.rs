use std::collections::BTreeMap;

use super::config::SimulationConfig;
use super::stats::PlayerEquity;

/// Results of an equity simulation
///
/// Players are keyed `player_1`, `player_2`, ... in the order their hands
/// were given.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EquityReport {
    /// Number of trials run
    pub trials: u64,
    /// Seed the run used, configured or drawn at random
    pub seed: u64,
    players: BTreeMap<String, PlayerEquity>,
}

/// The report key for the player at zero based `idx`.
pub fn player_key(idx: usize) -> String {
    format!("player_{}", idx + 1)
}

impl EquityReport {
    pub(crate) fn new(trials: u64, seed: u64, players: Vec<PlayerEquity>) -> Self {
        let players = players
            .into_iter()
            .enumerate()
            .map(|(idx, equity)| (player_key(idx), equity))
            .collect();
        Self {
            trials,
            seed,
            players,
        }
    }

    /// Number of players simulated
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Every player with their equity, in seat order
    pub fn players(&self) -> impl Iterator<Item = (&str, &PlayerEquity)> {
        let mut all: Vec<(&str, &PlayerEquity)> = self
            .players
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        all.sort_by_key(|(k, _)| seat_of(k));
        all.into_iter()
    }

    /// Look up a player by key, e.g. `player_1`
    pub fn get(&self, key: &str) -> Option<&PlayerEquity> {
        self.players.get(key)
    }

    /// Look up a player by zero based seat index
    pub fn player(&self, idx: usize) -> Option<&PlayerEquity> {
        self.players.get(&player_key(idx))
    }

    /// All player equities keyed by player
    pub fn all(&self) -> &BTreeMap<String, PlayerEquity> {
        &self.players
    }

    /// Sum of every player's equity. This is 100 up to rounding.
    pub fn total_equity(&self) -> f64 {
        self.players.values().map(|p| p.equity).sum()
    }

    /// Format results as Markdown output
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Omaha Hi-Lo Equity\n\n");
        output.push_str(&format!("- **Trials**: {}\n", self.trials));
        output.push_str(&format!("- **Seed**: {}\n\n", self.seed));

        output.push_str("| Player | Equity | High | Low | Scoop | 3/4 | Split | 1/4 |\n");
        output.push_str("|--------|--------|------|-----|-------|-----|-------|-----|\n");
        for (name, p) in self.players() {
            output.push_str(&format!(
                "| {} | {:.2}% | {:.2}% | {:.2}% | {:.2}% | {:.2}% | {:.2}% | {:.2}% |\n",
                name,
                p.equity,
                p.hi_win_rate,
                p.lo_win_rate,
                p.scoop_rate,
                p.three_quarter_rate,
                p.split_rate,
                p.quarter_rate,
            ));
        }
        output
    }

    /// Serialize the report to pretty printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// The config that reproduces this exact run.
    pub fn replay_config(&self, batch_size: u64) -> SimulationConfig {
        SimulationConfig {
            trials: self.trials,
            batch_size,
            seed: Some(self.seed),
        }
    }
}

fn seat_of(key: &str) -> usize {
    key.strip_prefix("player_")
        .and_then(|n| n.parse().ok())
        .unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omaha::pot::PotSplit;
    use crate::omaha::simulation::stats::PlayerStats;

    fn report(n: usize) -> EquityReport {
        let players = (0..n)
            .map(|i| {
                let mut stats = PlayerStats::new();
                stats.record(&PotSplit::new(1, 0).settle(i == 0, false));
                stats.finish(1)
            })
            .collect();
        EquityReport::new(1, 7, players)
    }

    #[test]
    fn test_keys_are_one_based() {
        let r = report(3);
        assert_eq!(3, r.num_players());
        assert!(r.get("player_0").is_none());
        assert_eq!(100.0, r.get("player_1").unwrap().equity);
        assert_eq!(r.get("player_2"), r.player(1));
    }

    #[test]
    fn test_players_in_seat_order() {
        let r = report(9);
        let keys: Vec<&str> = r.players().map(|(k, _)| k).collect();
        assert_eq!("player_1", keys[0]);
        assert_eq!("player_9", keys[8]);
        assert_eq!(100.0, r.total_equity());
    }

    #[test]
    fn test_markdown_has_every_player() {
        let md = report(2).to_markdown();
        assert!(md.contains("| player_1 | 100.00%"));
        assert!(md.contains("| player_2 | 0.00%"));
    }

    #[test]
    fn test_replay_config() {
        let config = report(2).replay_config(50);
        assert_eq!(Some(7), config.seed);
        assert_eq!(1, config.trials);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json() {
        let json = report(2).to_json().unwrap();
        assert!(json.contains("\"player_1\""));
        let back: EquityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report(2), back);
    }
}
