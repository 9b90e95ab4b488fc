//! Player seats.
//!
//! The game has exactly two players. They share one score, so a seat only
//! matters for deciding whose turn it is and who the outcome favours.

use serde::{Deserialize, Serialize};

/// Seat at the table: the player who moved first or the one who replied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// Player who started the game.
    #[default]
    First,
    /// Player who moves second.
    Second,
}

impl Seat {
    /// Seat that moves after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "Player 1"),
            Seat::Second => write!(f, "Player 2"),
        }
    }
}
