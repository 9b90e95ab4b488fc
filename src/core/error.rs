//! Error type shared by the whole engine.
//!
//! Every error is a usage error from the caller's point of view. The engine
//! never retries and never leaves a state half-mutated: an operation that
//! returns `Err` has not touched its input.

use thiserror::Error;

use super::moves::Move;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("string length {length} is outside the allowed range {min}..={max}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("length bounds {min}..={max} are invalid")]
    InvalidBounds { min: usize, max: usize },

    #[error("a digit string must contain at least one digit")]
    EmptySequence,

    #[error("digit {value} at position {index} is outside 1..=6")]
    DigitOutOfRange { index: usize, value: u8 },

    #[error("no legal moves: the game is over")]
    NoLegalMove,

    #[error("{0} is not a legal move")]
    IllegalMove(Move),

    #[error("the game is over, no further moves are accepted")]
    GameOver,

    #[error("the game is not over yet ({remaining} digits remain)")]
    NotTerminal { remaining: usize },

    #[error("{0} would overflow the score")]
    ScoreOverflow(Move),
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, GameError>;
