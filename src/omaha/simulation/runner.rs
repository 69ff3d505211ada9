use std::sync::atomic::{AtomicBool, Ordering};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::event;

use crate::core::{Card, CardBitSet, Deck, FlatDeck, HiLoError, Result, Suit, Value};
use crate::omaha::evaluator::{best_high_of, best_low_of, board_triples, BOARD_CARDS};
use crate::omaha::pot::PotSplit;

use super::config::SimulationConfig;
use super::report::EquityReport;
use super::stats::PlayerStats;

/// Monte carlo equity simulation for a fixed set of hands and a partial
/// board.
///
/// Every trial deals the rest of the board from the cards nobody holds,
/// finds each player's best high and best low, and splits the pot:
/// 1. Half to the best high and half to the best low, or all of it to the
///    best high when no low qualifies.
/// 2. Ties share their half evenly.
/// 3. Each player's share is classified as a scoop, three quarter, split,
///    or quarter.
///
/// Trials are run in batches. Each batch gets its own `StdRng`, seeded
/// from a master rng, and its own copy of the deck. That makes a seeded
/// run reproducible no matter how batches get scheduled.
#[derive(Debug, Clone)]
pub struct HiLoSimulation {
    config: SimulationConfig,
    hands: Vec<Vec<Card>>,
    board: Vec<Card>,
    /// Every two card combination of each player's hole cards.
    hole_pairs: Vec<Vec<CardBitSet>>,
    /// Cards that can still come on the board.
    deck: Deck,
}

impl HiLoSimulation {
    /// Create a new simulation (internal - use HiLoSimulationBuilder
    /// instead, it validates the inputs)
    pub(crate) fn new(
        config: SimulationConfig,
        hands: Vec<Vec<Card>>,
        board: Vec<Card>,
        hole_pairs: Vec<Vec<CardBitSet>>,
        deck: Deck,
    ) -> Self {
        Self {
            config,
            hands,
            board,
            hole_pairs,
            deck,
        }
    }

    /// Get the simulation configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get every player's hole cards
    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    /// Get the known board cards
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    /// Get the cards that can still be dealt
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Run every trial and return the report.
    pub fn run(&self) -> EquityReport {
        let (seed, batch_seeds) = self.start();

        let mut totals = vec![PlayerStats::new(); self.num_players()];
        for (idx, &batch_seed) in batch_seeds.iter().enumerate() {
            let batch = self.run_batch(batch_seed, self.config.batch_len(idx as u64));
            merge_into(&mut totals, &batch);
        }

        self.finish(seed, &totals)
    }

    /// Run every trial, checking `cancel` between batches.
    ///
    /// Returns `HiLoError::Cancelled` as soon as the flag is seen set. No
    /// partial report is returned.
    pub fn run_cancellable(&self, cancel: &AtomicBool) -> Result<EquityReport> {
        let (seed, batch_seeds) = self.start();

        let mut totals = vec![PlayerStats::new(); self.num_players()];
        for (idx, &batch_seed) in batch_seeds.iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                event!(tracing::Level::INFO, batch = idx, "Simulation cancelled");
                return Err(HiLoError::Cancelled);
            }
            let batch = self.run_batch(batch_seed, self.config.batch_len(idx as u64));
            merge_into(&mut totals, &batch);
        }

        Ok(self.finish(seed, &totals))
    }

    /// Run every trial with the batches spread over the rayon thread pool.
    ///
    /// Given the same seed this returns exactly what [`Self::run`] does.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> EquityReport {
        use rayon::prelude::*;

        let (seed, batch_seeds) = self.start();
        let n = self.num_players();
        let totals = batch_seeds
            .par_iter()
            .enumerate()
            .map(|(idx, &batch_seed)| {
                self.run_batch(batch_seed, self.config.batch_len(idx as u64))
            })
            .reduce(
                || vec![PlayerStats::new(); n],
                |mut a, b| {
                    merge_into(&mut a, &b);
                    a
                },
            );

        self.finish(seed, &totals)
    }

    /// Pick the run seed and derive one seed per batch from it.
    fn start(&self) -> (u64, Vec<u64>) {
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);

        event!(
            tracing::Level::INFO,
            players = self.num_players(),
            board = self.board.len(),
            trials = self.config.trials,
            batch_size = self.config.batch_size,
            seed,
            "Starting hi-lo simulation"
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let batch_seeds = (0..self.config.num_batches())
            .map(|_| rng.random::<u64>())
            .collect();
        (seed, batch_seeds)
    }

    fn finish(&self, seed: u64, totals: &[PlayerStats]) -> EquityReport {
        let trials = self.config.trials;
        let players = totals.iter().map(|s| s.finish(trials)).collect();
        let report = EquityReport::new(trials, seed, players);

        event!(
            tracing::Level::INFO,
            trials,
            total_equity = report.total_equity(),
            "Finished hi-lo simulation"
        );
        report
    }

    /// Run `len` trials with their own rng and deck.
    fn run_batch(&self, seed: u64, len: u64) -> Vec<PlayerStats> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut deck = FlatDeck::from(&self.deck);
        let mut stats = vec![PlayerStats::new(); self.num_players()];

        let known = self.board.len();
        let mut board = [Card::new(Value::Two, Suit::Spade); BOARD_CARDS];
        board[..known].copy_from_slice(&self.board);

        for _ in 0..len {
            let drawn = deck.sample(&mut rng, BOARD_CARDS - known);
            board[known..].copy_from_slice(drawn);
            self.run_trial(&board, &mut stats);
        }

        event!(tracing::Level::DEBUG, seed, trials = len, "Finished batch");
        stats
    }

    /// Evaluate one complete board for everyone and count the result.
    fn run_trial(&self, board: &[Card; BOARD_CARDS], stats: &mut [PlayerStats]) {
        let triples = board_triples(board);

        let mut highs = Vec::with_capacity(self.num_players());
        let mut lows = Vec::with_capacity(self.num_players());
        for pairs in &self.hole_pairs {
            highs.push(best_high_of(pairs, &triples).map(|(_, rank)| rank));
            lows.push(best_low_of(pairs, &triples).map(|(_, rank)| rank));
        }

        // Hands are always complete so every player has a high.
        let best_high = highs.iter().max().copied().flatten();
        let best_low = lows.iter().flatten().min().copied();

        let hi_winners: Vec<bool> = highs
            .iter()
            .map(|h| h.is_some() && *h == best_high)
            .collect();
        let lo_winners: Vec<bool> = lows
            .iter()
            .map(|l| l.is_some() && *l == best_low)
            .collect();

        let split = PotSplit::new(
            hi_winners.iter().filter(|w| **w).count(),
            lo_winners.iter().filter(|w| **w).count(),
        );

        for ((player, &hi), &lo) in stats.iter_mut().zip(&hi_winners).zip(&lo_winners) {
            player.record(&split.settle(hi, lo));
        }
    }
}

fn merge_into(totals: &mut [PlayerStats], batch: &[PlayerStats]) {
    for (total, b) in totals.iter_mut().zip(batch) {
        total.merge(b);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::core::parse_cards;
    use crate::omaha::pot::PotShare;
    use crate::omaha::simulation::HiLoSimulationBuilder;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test_log::test]
    fn test_single_player_full_board() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As Ah Ks Kh 2c"))
            .board(cards("3d 4d 9c Tc Jh"))
            .trials(100)
            .seed(1)
            .build()
            .unwrap();
        let report = sim.run();
        let p = report.get("player_1").unwrap();
        assert_eq!(100.0, p.equity);
        assert_eq!(100, p.hi_wins);
        assert_eq!(100, p.scoops);
    }

    #[test_log::test]
    fn test_full_board_is_deterministic() {
        // Player one: A2 + 3 4 8 makes the nut low, AA + 8 is a pair of
        // aces. Player two: 8 8 + 8 is trips.
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As 2s Ad Kc Qc"))
            .hand(cards("8h 8c Jd Td 9s"))
            .board(cards("3h 4c 8d Kh 6s"))
            .trials(50)
            .seed(3)
            .build()
            .unwrap();
        let report = sim.run();
        let one = report.player(0).unwrap();
        let two = report.player(1).unwrap();
        assert_eq!(50, one.lo_wins);
        assert_eq!(0, one.hi_wins);
        assert_eq!(50, two.hi_wins);
        assert_eq!(50, one.splits);
        assert_eq!(50, two.splits);
        assert_relative_eq!(50.0, one.equity);
        assert_relative_eq!(50.0, two.equity);
    }

    #[test_log::test]
    fn test_equity_sums_to_hundred() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As Ah Ks Kh 2c"))
            .hand(cards("Qs Qh Js Jh Tc"))
            .hand(cards("3c 4c 5c 6d 7d"))
            .trials(2_000)
            .batch_size(300)
            .seed(42)
            .build()
            .unwrap();
        let report = sim.run();
        assert_eq!(3, report.num_players());
        assert_relative_eq!(100.0, report.total_equity(), epsilon = 1e-9);
        for (_, p) in report.players() {
            assert!(p.equity >= 0.0 && p.equity <= 100.0);
            assert_relative_eq!(p.equity, p.hi_equity + p.lo_equity, epsilon = 1e-9);
        }
    }

    #[test_log::test]
    fn test_seed_reproducible() {
        let build = || {
            HiLoSimulationBuilder::new()
                .hand(cards("As Ah Ks Kh 2c"))
                .hand(cards("Qs Qh Js Jh Tc"))
                .board(cards("3d 7h"))
                .trials(500)
                .batch_size(64)
                .seed(1234)
                .build()
                .unwrap()
        };
        assert_eq!(build().run(), build().run());
    }

    #[test_log::test]
    fn test_unseeded_runs_record_seed() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As Ah Ks Kh 2c"))
            .hand(cards("Qs Qh Js Jh Tc"))
            .trials(200)
            .build()
            .unwrap();
        let first = sim.run();

        let replay = HiLoSimulationBuilder::new()
            .hands(sim.hands().to_vec())
            .config(first.replay_config(sim.config().batch_size))
            .build()
            .unwrap();
        assert_eq!(first, replay.run());
    }

    #[test_log::test]
    fn test_cancelled() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As Ah Ks Kh 2c"))
            .hand(cards("Qs Qh Js Jh Tc"))
            .trials(1_000)
            .build()
            .unwrap();
        let cancel = AtomicBool::new(true);
        assert_eq!(Err(HiLoError::Cancelled), sim.run_cancellable(&cancel));
    }

    #[test]
    fn test_trial_shares_add_up() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As 2s Ad Kc Qc"))
            .hand(cards("Ah 2h 8h 8c Jd"))
            .hand(cards("3s 5s 9d 9h Tc"))
            .build()
            .unwrap();
        let board: [Card; 5] = cards("3h 4c 8d Kh 6s").try_into().unwrap();
        let mut stats = vec![PlayerStats::new(); 3];
        sim.run_trial(&board, &mut stats);
        let total: PotShare = stats.iter().map(|s| s.total_value()).sum();
        assert_eq!(PotShare::WHOLE, total);
        // The first two share the nut low.
        assert!(stats[0].lo_wins == 1 && stats[1].lo_wins == 1);
        assert_eq!(PotShare::QUARTER, stats[0].lo_value);
    }

    #[cfg(feature = "parallel")]
    #[test_log::test]
    fn test_parallel_matches_sequential() {
        let sim = HiLoSimulationBuilder::new()
            .hand(cards("As Ah Ks Kh 2c"))
            .hand(cards("Qs Qh Js Jh Tc"))
            .trials(1_000)
            .batch_size(100)
            .seed(99)
            .build()
            .unwrap();
        assert_eq!(sim.run(), sim.run_parallel());
    }
}
