//! The pair-sum digit game.
//!
//! - The game starts on a random string of 15-25 digits, each 1-6
//! - On a turn a player sums a pair (first with second, third with fourth,
//!   ...) for +1 point, or deletes the trailing unpaired digit for -1 point
//! - Sums above 6 wrap around: 7 = 1, 8 = 2, ..., 12 = 6
//! - When one digit remains the bank is added to the score; an even digit
//!   and even score is a win for the first player, odd and odd a win for
//!   the second, anything else a draw

mod game;

pub use game::PairSumGame;
