//! Rules engine trait and game outcome.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each game state
//! - How moves modify state
//! - The terminal condition and its outcome
//!
//! Drivers call into `RulesEngine` and never re-derive legality themselves.

pub mod engine;

pub use engine::{Outcome, RulesEngine};
