//! Game state: the digit string, the shared score and the bank.
//!
//! ## Invariants
//!
//! - Every digit is in `1..=6`
//! - The string is never empty
//! - Each applied move shortens the string by exactly one
//!
//! Fields are private so that only the rules can mutate them; constructors
//! validate their input instead of trusting it.
//!
//! Player identity is not part of the state. Whose turn it is belongs to
//! the caller (see `driver::Session`).

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};
use super::moves::Move;

/// Smallest digit value.
pub const MIN_DIGIT: u8 = 1;

/// Largest digit value.
pub const MAX_DIGIT: u8 = 6;

/// Reduce a pair sum back into `1..=6`.
///
/// Sums of two digits lie in `2..=12`, so subtracting six once is enough:
/// 7 becomes 1, 8 becomes 2, and so on up to 12 becoming 6.
#[must_use]
pub const fn substitute(sum: u8) -> u8 {
    if sum > MAX_DIGIT {
        sum - MAX_DIGIT
    } else {
        sum
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateParts")]
pub struct GameState {
    digits: Vec<u8>,
    score: i64,
    bank: i64,
}

impl GameState {
    /// Start a game on freshly generated digits, with score and bank at zero.
    pub(crate) fn fresh(digits: Vec<u8>) -> Result<Self> {
        Self::from_parts(digits, 0, 0)
    }

    /// Build a state from explicit parts.
    ///
    /// Used to set up a specific position or an administrative bank.
    /// Rejects an empty string and digits outside `1..=6`.
    ///
    /// ```
    /// use digit_pairs::core::GameState;
    ///
    /// let state = GameState::from_parts(vec![4, 5, 1], 2, 0).unwrap();
    /// assert_eq!(state.len(), 3);
    /// assert!(GameState::from_parts(vec![7], 0, 0).is_err());
    /// ```
    pub fn from_parts(digits: Vec<u8>, score: i64, bank: i64) -> Result<Self> {
        if digits.is_empty() {
            return Err(GameError::EmptySequence);
        }
        if let Some((index, &value)) = digits
            .iter()
            .enumerate()
            .find(|&(_, &d)| !(MIN_DIGIT..=MAX_DIGIT).contains(&d))
        {
            return Err(GameError::DigitOutOfRange { index, value });
        }

        Ok(Self { digits, score, bank })
    }

    /// Current digit string.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: a state holds at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Running score (may be negative).
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// End-of-game adjustment added to the score.
    #[must_use]
    pub fn bank(&self) -> i64 {
        self.bank
    }

    /// Score plus bank, the value the outcome is judged on.
    ///
    /// Widened so that any score and bank accepted by `from_parts` add
    /// without overflow.
    #[must_use]
    pub fn final_score(&self) -> i128 {
        i128::from(self.score) + i128::from(self.bank)
    }

    /// True once a single digit remains.
    #[must_use]
    pub fn has_single_digit(&self) -> bool {
        self.digits.len() == 1
    }

    /// True when the string has a trailing digit without a partner.
    #[must_use]
    pub fn has_unpaired(&self) -> bool {
        self.digits.len() % 2 == 1
    }

    // === Mutation (rules only) ===

    /// Score after `mv`, or `ScoreOverflow` if it leaves the `i64` range.
    pub(crate) fn score_after(&self, mv: Move) -> Result<i64> {
        self.score
            .checked_add(mv.score_delta())
            .ok_or(GameError::ScoreOverflow(mv))
    }

    /// Replace `digits[index..=index + 1]` with their reduced sum.
    ///
    /// Returns the two consumed digits and the written one. Bounds must
    /// already have been checked by the caller; the score is checked here
    /// before anything changes.
    pub(crate) fn merge_pair(&mut self, index: usize) -> Result<(u8, u8, u8)> {
        let score = self.score_after(Move::PairSum { index })?;
        let (a, b) = (self.digits[index], self.digits[index + 1]);
        let result = substitute(a + b);
        self.digits[index] = result;
        self.digits.remove(index + 1);
        self.score = score;
        Ok((a, b, result))
    }

    /// Remove `digits[index]`, returning it.
    pub(crate) fn remove_digit(&mut self, index: usize) -> Result<u8> {
        let score = self.score_after(Move::DeleteUnpaired { index })?;
        let removed = self.digits.remove(index);
        self.score = score;
        Ok(removed)
    }
}

/// Unvalidated wire form of a state.
#[derive(Deserialize)]
struct StateParts {
    digits: Vec<u8>,
    score: i64,
    bank: i64,
}

impl TryFrom<StateParts> for GameState {
    type Error = GameError;

    fn try_from(parts: StateParts) -> Result<Self> {
        Self::from_parts(parts.digits, parts.score, parts.bank)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", digit)?;
        }
        write!(f, " | score {} | bank {}", self.score, self.bank)
    }
}
