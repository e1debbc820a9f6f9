//! Headless tests of the full turn cycle.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_solo::{
    FirstMover, GameOutcome, GameSession, Mark, Position, RecordingPresenter, Rendered,
    ResetPolicy, Square, Status, Strategy, TurnReport,
};

fn session(strategy: Strategy, first_mover: FirstMover, reset: ResetPolicy) -> GameSession {
    GameSession::new(
        strategy.build(ChaCha8Rng::seed_from_u64(11)),
        first_mover,
        reset,
        ChaCha8Rng::seed_from_u64(5),
    )
}

#[test]
fn test_start_renders_empty_board() {
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();

    let cleared = p
        .calls()
        .iter()
        .filter(|c| matches!(c, Rendered::Cell(_, Square::Empty)))
        .count();
    assert_eq!(cleared, 9);
    assert_eq!(p.last_status(), Some(Status::PlayerTurn));
    assert_eq!(p.last_score(), Some(Default::default()));
    assert!(s.awaiting_human());
}

#[test]
fn test_human_move_is_answered() {
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();
    p.clear();

    let report = s.on_cell_selected(Position::Center.to_index(), &mut p).unwrap();
    assert_eq!(report, TurnReport::Continued);
    assert_eq!(
        p.marks_drawn(),
        vec![(Position::Center, Mark::X), (Position::TopLeft, Mark::O)]
    );
    assert_eq!(p.last_status(), Some(Status::PlayerTurn));
}

#[test]
fn test_invalid_selections_are_ignored() {
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();
    s.on_cell_selected(4, &mut p).unwrap();
    let before = s.game().clone();
    p.clear();

    // Occupied by X, occupied by O, off the board.
    assert_eq!(s.on_cell_selected(4, &mut p).unwrap(), TurnReport::Ignored);
    assert_eq!(s.on_cell_selected(0, &mut p).unwrap(), TurnReport::Ignored);
    assert_eq!(s.on_cell_selected(9, &mut p).unwrap(), TurnReport::Ignored);
    assert_eq!(s.game(), &before);
    assert!(p.calls().is_empty());
}

#[test]
fn test_opponent_opens_before_human_input() {
    let mut s = session(Strategy::Minimax, FirstMover::Opponent, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();

    assert_eq!(s.game().first(), Mark::O);
    assert_eq!(s.game().history().len(), 1);
    assert_eq!(p.marks_drawn().len(), 1);
    assert!(s.awaiting_human());
    assert_eq!(p.last_status(), Some(Status::PlayerTurn));
}

#[test]
fn test_opponent_win_updates_score() {
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();

    // Weak human play: edges only. Minimax punishes it.
    let mut report = TurnReport::Continued;
    for idx in [1, 3, 5, 7, 2, 6, 8] {
        if s.game().is_over() {
            break;
        }
        report = s.on_cell_selected(idx, &mut p).unwrap();
    }

    assert_eq!(report, TurnReport::Finished(GameOutcome::Win(Mark::O)));
    assert_eq!(p.last_status(), Some(Status::Finished(GameOutcome::Win(Mark::O))));
    assert_eq!(*s.score().opponent_wins(), 1);
    assert_eq!(*s.score().human_wins(), 0);

    // Nothing more is accepted until reset.
    assert_eq!(s.on_cell_selected(0, &mut p).unwrap(), TurnReport::Ignored);
    assert!(!s.awaiting_human());
}

#[test]
fn test_reset_keeps_score_and_clears_board() {
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();
    for idx in [1, 3, 5, 7, 2, 6, 8] {
        if s.game().is_over() {
            break;
        }
        s.on_cell_selected(idx, &mut p).unwrap();
    }
    let score = *s.score();

    s.on_reset_requested(&mut p).unwrap();
    assert!(s.game().board().squares().iter().all(|sq| *sq == Square::Empty));
    assert!(s.game().history().is_empty());
    assert_eq!(s.game().to_move(), Mark::X);
    assert_eq!(s.score(), &score);
    assert_eq!(p.last_score(), Some(score));
}

#[test]
fn test_auto_reset_delay_only_after_game_over() {
    let delay = std::time::Duration::from_millis(250);
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::After(delay));
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();
    assert_eq!(s.auto_reset_delay(), None);

    for idx in [1, 3, 5, 7, 2, 6, 8] {
        if s.game().is_over() {
            break;
        }
        s.on_cell_selected(idx, &mut p).unwrap();
    }
    assert_eq!(s.auto_reset_delay(), Some(delay));

    let manual = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    assert_eq!(manual.auto_reset_delay(), None);
}

#[test]
fn test_perfect_play_ties_without_scoring() {
    // The human plays minimax too, seen from the other side of the board.
    let mut s = session(Strategy::Minimax, FirstMover::Human, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    s.start(&mut p).unwrap();

    let human = strictly_solo::Minimax::default();
    while s.awaiting_human() {
        let swapped = swap_marks(s.game().board());
        let (pos, _) = human.best_move(&swapped).unwrap();
        s.on_cell_selected(pos.to_index(), &mut p).unwrap();
    }

    assert_eq!(s.game().outcome(), GameOutcome::Tie);
    assert_eq!(p.last_status(), Some(Status::Finished(GameOutcome::Tie)));
    assert_eq!(*s.score().human_wins(), 0);
    assert_eq!(*s.score().opponent_wins(), 0);
}

fn swap_marks(board: &strictly_solo::Board) -> strictly_solo::Board {
    let mut swapped = strictly_solo::Board::new();
    for pos in Position::ALL {
        let sq = match board.get(pos) {
            Square::Occupied(mark) => Square::Occupied(mark.opponent()),
            Square::Empty => Square::Empty,
        };
        swapped.set(pos, sq);
    }
    swapped
}

#[test]
fn test_coin_toss_session_stays_consistent() {
    let mut s = session(Strategy::Heuristic, FirstMover::Random, ResetPolicy::Manual);
    let mut p = RecordingPresenter::new();
    let mut openers = Vec::new();
    for _ in 0..16 {
        s.on_reset_requested(&mut p).unwrap();
        openers.push(s.game().first());
        while s.awaiting_human() {
            let pos = s.game().valid_moves()[0];
            s.on_cell_selected(pos.to_index(), &mut p).unwrap();
        }
        assert!(s.game().is_over());
        assert!(s.game().check_invariants().is_ok());
    }
    assert!(openers.contains(&Mark::X));
    assert!(openers.contains(&Mark::O));
}
