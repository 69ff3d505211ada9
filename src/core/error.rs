use thiserror::Error;

use super::Card;

/// Everything that can go wrong when parsing cards or
/// setting up an equity computation.
///
/// All of these are raised before any simulation work starts.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HiLoError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Player {player} must hold exactly {expected} cards, found {found}")]
    InvalidHandSize {
        player: usize,
        expected: usize,
        found: usize,
    },

    #[error("The board can hold at most {max} cards, found {found}")]
    InvalidBoardSize { max: usize, found: usize },

    #[error("Hand analysis needs a complete board of 5 cards, found {found}")]
    InvalidAnalysisBoard { found: usize },

    #[error("At least {required} players are needed, found {found}")]
    InsufficientPlayers { required: usize, found: usize },

    #[error("At most {max} players fit in one deck, found {found}")]
    TooManyPlayers { max: usize, found: usize },

    #[error("Card {0} was used more than once")]
    DuplicateCard(Card),

    #[error("Invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("Simulation was cancelled")]
    Cancelled,
}

/// Result type for everything in this crate.
pub type Result<T> = std::result::Result<T, HiLoError>;
