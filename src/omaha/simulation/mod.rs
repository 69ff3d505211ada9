//! Monte carlo equity for Omaha Hi-Lo
//!
//! The board is completed at random many times over. Every completion is
//! scored for every player and the pot is split between the best high and
//! the best qualifying low. The report has, per player, how often they won
//! each half, how often they scooped, took three quarters, split or got
//! quartered, and their overall equity.
//!
//! # Example
//!
//! ```
//! use hilo_equity::core::parse_cards;
//! use hilo_equity::omaha::{HiLoSimulationBuilder, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     trials: 2_000,
//!     batch_size: 250,
//!     seed: Some(7),
//! };
//! let report = HiLoSimulationBuilder::new()
//!     .hand(parse_cards("As Ah Ks Kh 2c").unwrap())
//!     .hand(parse_cards("Qs Qh Js Jh Tc").unwrap())
//!     .config(config)
//!     .build()
//!     .unwrap()
//!     .run();
//!
//! let aces = report.get("player_1").unwrap();
//! assert!(aces.equity > 50.0);
//! println!("{}", report.to_markdown());
//! ```

mod builder;
mod config;
mod report;
mod runner;
mod stats;

pub use builder::{HiLoSimulationBuilder, MAX_PLAYERS};
pub use config::SimulationConfig;
pub use report::{player_key, EquityReport};
pub use runner::HiLoSimulation;
pub use stats::{PlayerEquity, PlayerStats};

use crate::core::{parse_cards, Card, HiLoError, Result};

/// Simulate `trials` random completions of `board` for every hand.
///
/// Hands must be five cards each and the board at most five cards, with no
/// card repeated anywhere. The result is keyed `player_1`, `player_2`, ...
/// in the order of `hands`.
pub fn compute_equity(hands: &[Vec<Card>], board: &[Card], trials: u64) -> Result<EquityReport> {
    simulate(
        hands,
        board,
        SimulationConfig {
            trials,
            ..SimulationConfig::default()
        },
    )
}

/// Same as [`compute_equity`] with full control over the config.
pub fn simulate(
    hands: &[Vec<Card>],
    board: &[Card],
    config: SimulationConfig,
) -> Result<EquityReport> {
    Ok(HiLoSimulationBuilder::new()
        .hands(hands.iter().cloned())
        .board(board.to_vec())
        .config(config)
        .build()?
        .run())
}

/// Two hands given as text against each other.
///
/// `board` may be empty. Either hand being empty is an
/// `InsufficientPlayers` error.
///
/// ```
/// use hilo_equity::omaha::head_to_head;
///
/// let report = head_to_head("As Ah Ks Kh 2c", "QsQhJsJhTc", "", 1_000).unwrap();
/// assert_eq!(2, report.num_players());
/// ```
pub fn head_to_head(hand_a: &str, hand_b: &str, board: &str, trials: u64) -> Result<EquityReport> {
    let hands = [parse_cards(hand_a)?, parse_cards(hand_b)?];
    let given = hands.iter().filter(|h| !h.is_empty()).count();
    if given < 2 {
        return Err(HiLoError::InsufficientPlayers {
            required: 2,
            found: given,
        });
    }
    let board = parse_cards(board)?;
    compute_equity(&hands, &board, trials)
}
