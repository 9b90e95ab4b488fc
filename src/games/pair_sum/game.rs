//! Pair-sum game rules.

use log::{debug, info};
use smallvec::smallvec;

use crate::core::{GameConfig, GameError, GameRng, GameState, Move, MoveList, MoveRecord, Result};
use crate::rules::{Outcome, RulesEngine};

/// Rules for the pair-sum game.
#[derive(Clone, Debug, Default)]
pub struct PairSumGame {
    config: GameConfig,
}

impl PairSumGame {
    /// Create a game with custom length bounds.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a game on `length` random digits.
    ///
    /// Fails with `InvalidLength` when `length` is outside the configured
    /// bounds. Score and bank start at zero.
    pub fn initialize(&self, length: usize, rng: &mut GameRng) -> Result<GameState> {
        self.config.check_length(length)?;

        let state = GameState::fresh(rng.gen_digits(length))?;
        debug!("new game (seed {}): {}", rng.seed(), state);
        Ok(state)
    }
}

impl RulesEngine for PairSumGame {
    fn legal_moves(&self, state: &GameState) -> Result<MoveList> {
        if self.is_terminal(state) {
            return Err(GameError::NoLegalMove);
        }

        let len = state.len();

        // Pairs are (0,1), (2,3), ... over the current string
        let mut moves: MoveList = (0..len - 1)
            .step_by(2)
            .map(|index| Move::PairSum { index })
            .collect();

        if state.has_unpaired() {
            moves.push(Move::DeleteUnpaired { index: len - 1 });
        }

        Ok(moves)
    }

    fn apply(&self, state: &mut GameState, mv: Move) -> Result<MoveRecord> {
        if self.is_terminal(state) {
            return Err(GameError::GameOver);
        }
        if !self.legal_moves(state)?.contains(&mv) {
            return Err(GameError::IllegalMove(mv));
        }

        let record = match mv {
            Move::PairSum { index } => {
                let (a, b, result) = state.merge_pair(index)?;
                MoveRecord {
                    mv,
                    consumed: smallvec![a, b],
                    produced: Some(result),
                    score_after: state.score(),
                }
            }
            Move::DeleteUnpaired { index } => {
                let removed = state.remove_digit(index)?;
                MoveRecord {
                    mv,
                    consumed: smallvec![removed],
                    produced: None,
                    score_after: state.score(),
                }
            }
        };

        debug!("{} -> {}", record, state);
        if self.is_terminal(state) {
            info!(
                "game over: final digit {}, final score {}",
                state.digits()[0],
                state.final_score()
            );
        }

        Ok(record)
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.has_single_digit()
    }

    fn evaluate(&self, state: &GameState) -> Result<Outcome> {
        match state.digits() {
            [final_digit] => Ok(Outcome::classify(*final_digit, state.final_score())),
            digits => Err(GameError::NotTerminal { remaining: digits.len() }),
        }
    }
}
