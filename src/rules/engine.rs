//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify state
//! - When the game ends and who won

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameState, Move, MoveList, MoveRecord, Result, Seat};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Final digit and final score are both even.
    FirstPlayerWins,
    /// Final digit and final score are both odd.
    SecondPlayerWins,
    /// Parities differ.
    Draw,
}

impl Outcome {
    /// Classify a finished game from its last digit and final score.
    ///
    /// ```
    /// use digit_pairs::rules::Outcome;
    ///
    /// assert_eq!(Outcome::classify(4, 2), Outcome::FirstPlayerWins);
    /// assert_eq!(Outcome::classify(3, 5), Outcome::SecondPlayerWins);
    /// assert_eq!(Outcome::classify(4, 3), Outcome::Draw);
    /// ```
    #[must_use]
    pub fn classify(final_digit: u8, final_score: i128) -> Self {
        let digit_even = final_digit % 2 == 0;
        let score_even = final_score.rem_euclid(2) == 0;

        match (digit_even, score_even) {
            (true, true) => Outcome::FirstPlayerWins,
            (false, false) => Outcome::SecondPlayerWins,
            _ => Outcome::Draw,
        }
    }

    /// Winning seat, if any.
    #[must_use]
    pub fn winner(self) -> Option<Seat> {
        match self {
            Outcome::FirstPlayerWins => Some(Seat::First),
            Outcome::SecondPlayerWins => Some(Seat::Second),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::FirstPlayerWins => write!(f, "{} wins", Seat::First),
            Outcome::SecondPlayerWins => write!(f, "{} wins", Seat::Second),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Error on a terminal state, never an empty list
/// - `apply`: Must reject anything `legal_moves` would not return, and must
///   leave the state untouched when it does
/// - `evaluate`: Pure function of the terminal state
pub trait RulesEngine {
    /// Enumerate the legal moves for a state.
    fn legal_moves(&self, state: &GameState) -> Result<MoveList>;

    /// Apply a move to the state.
    fn apply(&self, state: &mut GameState, mv: Move) -> Result<MoveRecord>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool;

    /// Decide the outcome of a finished game.
    fn evaluate(&self, state: &GameState) -> Result<Outcome>;

    // === Convenience Methods ===

    /// Check whether a move is currently legal.
    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        self.legal_moves(state)
            .map(|moves| moves.contains(&mv))
            .unwrap_or(false)
    }

    /// Play until the game ends, letting `choose` pick each move.
    ///
    /// `choose` receives the state and its legal moves and returns the move
    /// to apply. Returns the outcome and the number of moves played.
    fn play_out<F>(&self, state: &mut GameState, mut choose: F) -> Result<(Outcome, usize)>
    where
        F: FnMut(&GameState, &[Move]) -> Move,
    {
        let mut played = 0;

        while !self.is_terminal(state) {
            let moves = self.legal_moves(state)?;
            if moves.is_empty() {
                return Err(GameError::NoLegalMove);
            }
            let mv = choose(state, &moves);
            self.apply(state, mv)?;
            played += 1;
        }

        Ok((self.evaluate(state)?, played))
    }
}
