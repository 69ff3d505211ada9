/// Ranking five cards as a high hand.
mod high;
/// Export the high hand ranking.
pub use self::high::{evaluate_high, HandCategory, HighRank, Rankable};

/// Ranking five cards as an 8-or-better low.
mod low;
/// Export the low hand ranking.
pub use self::low::{evaluate_low, LowRank};

/// Best hand search using exactly two hole cards and three board cards.
mod evaluator;
/// Export the best hand search and single hand analysis.
pub use self::evaluator::{
    analyze_single, best_high, best_low, board_triples, hole_pairs, BestHand, HandAnalysis,
    HighHand, LowHand, BOARD_CARDS, HOLE_CARDS,
};

/// Splitting the pot between high and low winners.
mod pot;
/// Export pot shares and outcomes.
pub use self::pot::{PotOutcome, PotShare, PotSplit, TrialOutcome, POT_UNITS};

/// Monte carlo equity simulation.
pub mod simulation;
/// Export the simulation entry points.
pub use self::simulation::{
    compute_equity, head_to_head, simulate, EquityReport, HiLoSimulation, HiLoSimulationBuilder,
    PlayerEquity, PlayerStats, SimulationConfig,
};
