//! Property-based tests over reachable boards.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_solo::{
    Game, GameOutcome, Mark, Minimax, Move, Opponent, Position, Scoring, check_winner, evaluate,
    is_tie, Strategy as OpponentStrategy,
};

/// A game reached by playing up to `len` squares of a shuffled order,
/// stopping early if someone wins.
fn arb_game() -> impl Strategy<Value = Game> {
    let order = Just((0..9usize).collect::<Vec<_>>()).prop_shuffle();
    (order, 0usize..=9, any::<bool>()).prop_map(|(order, len, human_first)| {
        let first = if human_first { Mark::X } else { Mark::O };
        let mut game = Game::new(first);
        for idx in order.into_iter().take(len) {
            if game.is_over() {
                break;
            }
            let pos = Position::from_index(idx).expect("index in range");
            game.apply_move(Move::new(game.to_move(), pos))
                .expect("shuffled squares are distinct");
        }
        game
    })
}

/// A game where the opponent is to move.
fn arb_opponent_turn() -> impl Strategy<Value = Game> {
    arb_game().prop_filter("opponent to move in an unfinished game", |g| {
        !g.is_over() && g.to_move() == Mark::O
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_outcome_is_exclusive(game in arb_game()) {
        let board = game.board();
        let outcome = evaluate(board);
        prop_assert!(!(is_tie(board) && check_winner(board).is_some()));
        match outcome {
            GameOutcome::Win(mark) => prop_assert_eq!(check_winner(board), Some(mark)),
            GameOutcome::Tie => prop_assert!(is_tie(board)),
            GameOutcome::InProgress => {
                prop_assert!(check_winner(board).is_none());
                prop_assert!(!board.is_full());
            }
        }
        prop_assert_eq!(outcome, game.outcome());
    }

    #[test]
    fn prop_invariants_hold_after_every_move(game in arb_game()) {
        prop_assert!(game.check_invariants().is_ok());
        for pair in game.history().windows(2) {
            prop_assert_ne!(pair[0].mark, pair[1].mark);
        }
    }

    #[test]
    fn prop_opponent_picks_empty_square(game in arb_opponent_turn(), seed in any::<u64>()) {
        for strategy in [
            OpponentStrategy::Heuristic,
            OpponentStrategy::Minimax,
            OpponentStrategy::BacktrackingMinimax,
        ] {
            let mut opponent = strategy.build(ChaCha8Rng::seed_from_u64(seed));
            let pos = opponent.choose(game.board()).expect("board has an empty square");
            prop_assert!(game.board().is_empty(pos), "{} picked {}", strategy, pos);
        }
    }

    #[test]
    fn prop_search_restores_board(game in arb_opponent_turn()) {
        let board = *game.board();
        let flat = Minimax::new(Scoring::Flat).evaluate_moves(&board);
        let scaled = Minimax::default().evaluate_moves(&board);
        prop_assert_eq!(&board, game.board());
        prop_assert_eq!(flat.len(), board.empty_positions().len());
        prop_assert_eq!(scaled.len(), board.empty_positions().len());
    }

    #[test]
    fn prop_minimax_is_deterministic(game in arb_opponent_turn()) {
        let first = Minimax::default().best_move(game.board());
        let second = Minimax::default().best_move(game.board());
        prop_assert_eq!(first, second);
    }
}
