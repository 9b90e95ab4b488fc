//! Property tests over random seeds, lengths and move choices.

use proptest::prelude::*;

use digit_pairs::core::{GameRng, GameState, Move};
use digit_pairs::games::PairSumGame;
use digit_pairs::rules::{Outcome, RulesEngine};

proptest! {
    /// Every reachable state keeps its digits in range, and every move
    /// shortens the string by one and moves the score by exactly one.
    #[test]
    fn prop_invariants_hold_through_game(
        seed in any::<u64>(),
        choice_seed in any::<u64>(),
        length in 15usize..=25,
    ) {
        let game = PairSumGame::default();
        let mut state = game.initialize(length, &mut GameRng::new(seed)).unwrap();
        let mut choices = GameRng::new(choice_seed);
        let mut moves_played = 0;

        prop_assert!(state.digits().iter().all(|d| (1..=6).contains(d)));

        while !game.is_terminal(&state) {
            let moves = game.legal_moves(&state).unwrap();
            prop_assert!(!moves.is_empty());

            let mv = *choices.choose(&moves).unwrap();
            let (len_before, score_before) = (state.len(), state.score());
            let record = game.apply(&mut state, mv).unwrap();

            prop_assert_eq!(state.len(), len_before - 1);
            prop_assert_eq!(state.score() - score_before, mv.score_delta());
            prop_assert_eq!(record.score_after, state.score());
            prop_assert!(state.digits().iter().all(|d| (1..=6).contains(d)));
            moves_played += 1;
        }

        prop_assert_eq!(moves_played, length - 1);
        prop_assert_eq!(state.len(), 1);
        prop_assert!(game.evaluate(&state).is_ok());
    }

    /// Legal moves are exactly the even-indexed pairs plus the trailing
    /// delete on odd lengths.
    #[test]
    fn prop_legal_moves_shape(digits in prop::collection::vec(1u8..=6, 2..40)) {
        let game = PairSumGame::default();
        let state = GameState::from_parts(digits.clone(), 0, 0).unwrap();
        let moves = game.legal_moves(&state).unwrap();

        let pairs = moves.iter().filter(|mv| mv.is_pair_sum()).count();
        prop_assert_eq!(pairs, digits.len() / 2);

        for mv in &moves {
            match *mv {
                Move::PairSum { index } => {
                    prop_assert_eq!(index % 2, 0);
                    prop_assert!(index + 1 < digits.len());
                }
                Move::DeleteUnpaired { index } => {
                    prop_assert_eq!(digits.len() % 2, 1);
                    prop_assert_eq!(index, digits.len() - 1);
                }
            }
        }
    }

    /// Rejected moves never touch the state.
    #[test]
    fn prop_illegal_move_is_atomic(
        digits in prop::collection::vec(1u8..=6, 2..30),
        index in 0usize..40,
        pair in any::<bool>(),
    ) {
        let game = PairSumGame::default();
        let mut state = GameState::from_parts(digits, 3, 0).unwrap();
        let mv = if pair { Move::PairSum { index } } else { Move::DeleteUnpaired { index } };

        let before = state.clone();
        let legal = game.is_legal(&state, mv);
        let result = game.apply(&mut state, mv);

        prop_assert_eq!(result.is_ok(), legal);
        if !legal {
            prop_assert_eq!(state, before);
        }
    }

    /// The outcome depends only on the final digit and score plus bank.
    #[test]
    fn prop_outcome_is_parity_rule(digit in 1u8..=6, score in -30i64..30, bank in -5i64..5) {
        let game = PairSumGame::default();
        let state = GameState::from_parts(vec![digit], score, bank).unwrap();
        let total = score + bank;

        let expected = match (digit % 2 == 0, total.rem_euclid(2) == 0) {
            (true, true) => Outcome::FirstPlayerWins,
            (false, false) => Outcome::SecondPlayerWins,
            _ => Outcome::Draw,
        };
        prop_assert_eq!(game.evaluate(&state).unwrap(), expected);
    }
}
