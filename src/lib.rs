//! # digit-pairs
//!
//! Rule engine for a two-player arithmetic game played on a string of
//! random digits.
//!
//! ## Rules
//!
//! Players share one score. On each turn the player to move either sums a
//! pair of adjacent digits (first with second, third with fourth, ...),
//! writing the sum back in place of the pair and gaining a point, or deletes
//! the trailing unpaired digit and loses a point. Sums above six wrap
//! around. When one digit remains the bank is added to the score and parity
//! decides the game.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: digits come from a seedable `GameRng` passed
//!    in by the caller, so every game can be replayed from its seed.
//!
//! 2. **Turn-agnostic engine**: `GameState` knows digits, score and bank,
//!    never whose turn it is. Seats live in `driver::Session`.
//!
//! 3. **Atomic moves**: an operation that fails leaves the state untouched.
//!
//! ## Modules
//!
//! - `core`: State, moves, seats, RNG, configuration, errors
//! - `rules`: RulesEngine trait and game outcome
//! - `games`: The pair-sum game rules
//! - `driver`: Turn tracking for a single game

pub mod core;
pub mod rules;
pub mod games;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameState, Move, MoveList, MoveRecord, Result, Seat,
};

pub use crate::rules::{Outcome, RulesEngine};

pub use crate::games::PairSumGame;

pub use crate::driver::Session;
