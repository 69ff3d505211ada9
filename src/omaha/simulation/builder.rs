use tracing::event;

use crate::core::{Card, HiLoError, Result};
use crate::omaha::evaluator::{hole_pairs, remaining_deck, BOARD_CARDS, HOLE_CARDS};

use super::config::SimulationConfig;
use super::runner::HiLoSimulation;

/// Most players that fit: nine five card hands plus a full board is 50
/// cards.
pub const MAX_PLAYERS: usize = 9;

/// Builder for constructing HiLoSimulation instances
///
/// # Example
///
/// ```
/// use hilo_equity::core::parse_cards;
/// use hilo_equity::omaha::HiLoSimulationBuilder;
///
/// let sim = HiLoSimulationBuilder::new()
///     .hand(parse_cards("As Ah Ks Kh 2c").unwrap())
///     .hand(parse_cards("Qs Qh Js Jh Tc").unwrap())
///     .board(parse_cards("3d 4d 9c").unwrap())
///     .trials(500)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let report = sim.run();
/// assert_eq!(2, report.num_players());
/// ```
#[derive(Debug, Default, Clone)]
pub struct HiLoSimulationBuilder {
    hands: Vec<Vec<Card>>,
    board: Vec<Card>,
    config: Option<SimulationConfig>,
    trials: Option<u64>,
    batch_size: Option<u64>,
    seed: Option<u64>,
}

impl HiLoSimulationBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player's hole cards
    pub fn hand(mut self, hand: Vec<Card>) -> Self {
        self.hands.push(hand);
        self
    }

    /// Add several players' hole cards, in seat order
    pub fn hands<I>(mut self, hands: I) -> Self
    where
        I: IntoIterator<Item = Vec<Card>>,
    {
        self.hands.extend(hands);
        self
    }

    /// Set the known board cards
    pub fn board(mut self, board: Vec<Card>) -> Self {
        self.board = board;
        self
    }

    /// Start from a full config. Individual setters still win.
    pub fn config(mut self, config: SimulationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the number of trials
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Set the number of trials per batch
    pub fn batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Set the random seed for reproducibility
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the HiLoSimulation
    ///
    /// Everything is checked here so that running can't fail. In order:
    /// player count, each hand's size, board size, the config, and finally
    /// that no card shows up twice.
    pub fn build(self) -> Result<HiLoSimulation> {
        if self.hands.is_empty() {
            return Err(HiLoError::InsufficientPlayers {
                required: 1,
                found: 0,
            });
        }
        if self.hands.len() > MAX_PLAYERS {
            return Err(HiLoError::TooManyPlayers {
                max: MAX_PLAYERS,
                found: self.hands.len(),
            });
        }
        for (idx, hand) in self.hands.iter().enumerate() {
            if hand.len() != HOLE_CARDS {
                return Err(HiLoError::InvalidHandSize {
                    player: idx + 1,
                    expected: HOLE_CARDS,
                    found: hand.len(),
                });
            }
        }
        if self.board.len() > BOARD_CARDS {
            return Err(HiLoError::InvalidBoardSize {
                max: BOARD_CARDS,
                found: self.board.len(),
            });
        }

        let base = self.config.unwrap_or_default();
        let config = SimulationConfig {
            trials: self.trials.unwrap_or(base.trials),
            batch_size: self.batch_size.unwrap_or(base.batch_size),
            seed: self.seed.or(base.seed),
        };
        config.validate()?;

        let deck = remaining_deck(
            self.hands
                .iter()
                .map(Vec::as_slice)
                .chain(std::iter::once(self.board.as_slice())),
        )?;
        event!(
            tracing::Level::TRACE,
            remaining = deck.len(),
            "Built deck for simulation"
        );

        let pairs = self.hands.iter().map(|h| hole_pairs(h)).collect();
        Ok(HiLoSimulation::new(config, self.hands, self.board, pairs, deck))
    }
}
