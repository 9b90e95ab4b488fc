//! Move representation.
//!
//! A move is one of two verbs applied at a position of the current digit
//! string:
//! - "Pair sum" = replace the pair starting at an even index with its
//!   reduced sum
//! - "Delete unpaired" = drop the trailing digit of an odd-length string
//!
//! Indices always refer to the string as it is *now*, never to the
//! positions digits held when the game started.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single move.
///
/// Serializes as a tagged variant:
///
/// ```
/// use digit_pairs::core::Move;
///
/// let mv = Move::PairSum { index: 2 };
/// assert_eq!(mv.index(), 2);
/// assert!(mv.is_pair_sum());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Move {
    /// Sum `digits[index]` and `digits[index + 1]`.
    PairSum { index: usize },
    /// Remove the unpaired digit at `index`.
    DeleteUnpaired { index: usize },
}

impl Move {
    /// Position this move acts on.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::PairSum { index } | Move::DeleteUnpaired { index } => index,
        }
    }

    #[must_use]
    pub const fn is_pair_sum(self) -> bool {
        matches!(self, Move::PairSum { .. })
    }

    /// Score change this move always carries.
    #[must_use]
    pub const fn score_delta(self) -> i64 {
        match self {
            Move::PairSum { .. } => 1,
            Move::DeleteUnpaired { .. } => -1,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::PairSum { index } => write!(f, "pair sum at {}", index),
            Move::DeleteUnpaired { index } => write!(f, "delete unpaired at {}", index),
        }
    }
}

/// Legal moves for one position.
///
/// At most 12 pair sums plus one delete exist for the default length bounds,
/// so the common case never touches the heap.
pub type MoveList = SmallVec<[Move; 16]>;

/// What an applied move did, for display and logging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// Digits taken out of the string (two for a pair sum, one for a delete).
    pub consumed: SmallVec<[u8; 2]>,

    /// Digit written in place of the pair, if any.
    pub produced: Option<u8>,

    /// Score after the move.
    pub score_after: i64,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.mv, self.produced, self.consumed.as_slice()) {
            (Move::PairSum { index }, Some(result), [a, b]) => {
                write!(f, "merged {}+{}={} at {} (score {:+})", a, b, result, index, self.score_after)
            }
            (Move::DeleteUnpaired { index }, None, [removed]) => {
                write!(f, "removed {} at {} (score {:+})", removed, index, self.score_after)
            }
            (mv, _, _) => write!(f, "{} (score {:+})", mv, self.score_after),
        }
    }
}
