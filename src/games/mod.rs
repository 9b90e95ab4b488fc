//! Game implementations built on the rules engine.

pub mod pair_sum;

pub use pair_sum::PairSumGame;
