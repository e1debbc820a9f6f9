//! Board and rules engine.
//!
//! `Game` owns the board for the length of one game, enforces turn
//! order, and recomputes the outcome after every accepted move.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules::{self, GameOutcome};
use crate::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) first: Mark,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Move>,
    pub(crate) outcome: GameOutcome,
}

impl Game {
    /// Creates a new game with an empty board and `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            first,
            to_move: first,
            history: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Clears the board and starts over with `first` to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self, first: Mark) {
        *self = Self::new(first);
        debug!(first = %first, "Game reset");
    }

    /// Applies a move and returns the outcome it leads to.
    ///
    /// Rejected moves leave the game untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has a terminal outcome
    /// - [`MoveError::WrongTurn`] if `mv.mark` is not the mark to move
    /// - [`MoveError::SquareOccupied`] if the target square is taken
    #[instrument(skip(self), fields(mark = %mv.mark, position = %mv.position))]
    pub fn apply_move(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if mv.mark != self.to_move {
            return Err(MoveError::WrongTurn(mv.mark));
        }
        if !self.board.is_empty(mv.position) {
            return Err(MoveError::SquareOccupied(mv.position));
        }

        self.board.set(mv.position, Square::Occupied(mv.mark));
        self.history.push(mv);
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.to_move = mv.mark.opponent();
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        debug!(outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Verifies every game invariant.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvariantViolation`] naming each broken invariant.
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moved first in this game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Returns the mark to move.
    ///
    /// After a terminal outcome this is the mark that made the last move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns true once the game has a winner or is tied.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the empty positions, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Replays moves into a fresh game that `first` starts.
    #[instrument]
    pub fn replay(first: Mark, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(first);
        for mv in moves {
            game.apply_move(*mv)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Mark::HUMAN)
    }
}
