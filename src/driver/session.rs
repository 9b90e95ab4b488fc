//! A single game between two seats.
//!
//! `Session` owns the state and the rules and tracks whose turn it is. The
//! engine itself is turn-agnostic; seats exist only here.

use log::debug;

use crate::core::{GameRng, GameState, Move, MoveList, MoveRecord, Result, Seat};
use crate::games::PairSumGame;
use crate::rules::{Outcome, RulesEngine};

/// A game in progress plus turn tracking.
#[derive(Clone, Debug)]
pub struct Session {
    game: PairSumGame,
    state: GameState,
    to_move: Seat,
    moves_played: usize,
    last_move: Option<(Seat, MoveRecord)>,
}

impl Session {
    /// Start a new game of `length` digits. The first seat moves first.
    pub fn start(game: PairSumGame, length: usize, rng: &mut GameRng) -> Result<Self> {
        let state = game.initialize(length, rng)?;
        Ok(Self::from_state(game, state))
    }

    /// Resume from an existing state, first seat to move.
    #[must_use]
    pub fn from_state(game: PairSumGame, state: GameState) -> Self {
        Self {
            game,
            state,
            to_move: Seat::First,
            moves_played: 0,
            last_move: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rules in use.
    #[must_use]
    pub fn game(&self) -> &PairSumGame {
        &self.game
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Moves applied so far.
    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Most recent move and the seat that made it.
    #[must_use]
    pub fn last_move(&self) -> Option<&(Seat, MoveRecord)> {
        self.last_move.as_ref()
    }

    /// Legal moves for the seat to move.
    pub fn legal_moves(&self) -> Result<MoveList> {
        self.game.legal_moves(&self.state)
    }

    /// Apply a move for the seat to move and pass the turn.
    ///
    /// On error nothing changes, including whose turn it is.
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord> {
        let record = self.game.apply(&mut self.state, mv)?;
        debug!("{} played {}", self.to_move, record);

        self.last_move = Some((self.to_move, record.clone()));
        self.moves_played += 1;
        self.to_move = self.to_move.other();
        Ok(record)
    }

    /// True once one digit remains.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game.is_terminal(&self.state)
    }

    /// Outcome of the finished game.
    pub fn outcome(&self) -> Result<Outcome> {
        self.game.evaluate(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_turns_alternate() {
        let mut rng = GameRng::new(42);
        let mut session = Session::start(PairSumGame::default(), 15, &mut rng).unwrap();

        assert_eq!(session.to_move(), Seat::First);
        session.play(Move::PairSum { index: 0 }).unwrap();
        assert_eq!(session.to_move(), Seat::Second);
        session.play(Move::PairSum { index: 0 }).unwrap();
        assert_eq!(session.to_move(), Seat::First);
        assert_eq!(session.moves_played(), 2);
        assert_eq!(session.last_move().map(|(seat, _)| *seat), Some(Seat::Second));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut rng = GameRng::new(42);
        let mut session = Session::start(PairSumGame::default(), 16, &mut rng).unwrap();
        let before = session.state().clone();

        let err = session.play(Move::DeleteUnpaired { index: 15 }).unwrap_err();
        assert_eq!(err, GameError::IllegalMove(Move::DeleteUnpaired { index: 15 }));
        assert_eq!(session.to_move(), Seat::First);
        assert_eq!(session.moves_played(), 0);
        assert!(session.last_move().is_none());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_outcome_before_end() {
        let mut rng = GameRng::new(1);
        let session = Session::start(PairSumGame::default(), 20, &mut rng).unwrap();
        assert_eq!(session.outcome(), Err(GameError::NotTerminal { remaining: 20 }));
    }

    #[test]
    fn test_from_state() {
        let state = GameState::from_parts(vec![2, 2], 1, 0).unwrap();
        let mut session = Session::from_state(PairSumGame::default(), state);

        session.play(Move::PairSum { index: 0 }).unwrap();
        assert!(session.is_over());
        assert_eq!(session.state().digits(), &[4]);
        assert_eq!(session.outcome(), Ok(Outcome::FirstPlayerWins));
    }
}
