//! Core engine types: state, moves, seats, RNG, configuration, errors.
//!
//! These are the building blocks the rules operate on. None of them know
//! the rules themselves; legality and scoring live in `rules` and `games`.

pub mod error;
pub mod player;
pub mod rng;
pub mod config;
pub mod moves;
pub mod state;

pub use error::{GameError, Result};
pub use player::Seat;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
pub use moves::{Move, MoveList, MoveRecord};
pub use state::{substitute, GameState, MAX_DIGIT, MIN_DIGIT};
