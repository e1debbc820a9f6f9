//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board
//! storage so the engine, the invariants and the opponent search all
//! share one definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};

use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Derived from the board after every move, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// The mark completed a winning line.
    Win(Mark),
    /// Board full with no winning line.
    Tie,
}

impl GameOutcome {
    /// Returns true for `Win` and `Tie`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(mark) => write!(f, "{} wins", mark),
            GameOutcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Evaluates the board.
///
/// Win detection runs before the tie check, so a full board that also
/// completes a line is a win.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}
