//! Exhaustive minimax search over the remaining empty squares.
//!
//! Scores are from the opponent's point of view: `O` maximizes, `X`
//! minimizes. The search places a mark, recurses, and clears the square
//! again, so the board it was handed is left exactly as it was.

use super::Opponent;
use crate::action::NoMoveAvailable;
use crate::position::Position;
use crate::rules::{self, GameOutcome};
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a won game before any depth adjustment.
pub(crate) const WIN_SCORE: i32 = 10;

/// How terminal positions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scoring {
    /// Every win scores ±10 regardless of how far away it is.
    Flat,
    /// Wins score `10 - depth` and losses `depth - 10`, so faster wins
    /// and slower losses are preferred.
    DepthScaled,
}

impl Scoring {
    /// Scores a terminal outcome reached `depth` plies below the root.
    ///
    /// Returns `None` while the game is still in progress.
    pub(crate) fn terminal(self, outcome: GameOutcome, depth: i32) -> Option<i32> {
        let penalty = match self {
            Scoring::Flat => 0,
            Scoring::DepthScaled => depth,
        };
        match outcome {
            GameOutcome::InProgress => None,
            GameOutcome::Tie => Some(0),
            GameOutcome::Win(mark) if mark == Mark::OPPONENT => Some(WIN_SCORE - penalty),
            GameOutcome::Win(_) => Some(penalty - WIN_SCORE),
        }
    }
}

/// Minimax opponent with in-place backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    scoring: Scoring,
}

impl Minimax {
    /// Creates a minimax opponent with the given scoring.
    pub fn new(scoring: Scoring) -> Self {
        Self { scoring }
    }

    /// Returns the scoring rule.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Scores every empty square as the opponent's next move.
    ///
    /// Squares are returned in ascending index order.
    #[instrument(skip(self, board), fields(scoring = ?self.scoring))]
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        let mut scratch = *board;
        let scores: Vec<_> = board
            .empty_positions()
            .into_iter()
            .map(|pos| {
                scratch.set(pos, Square::Occupied(Mark::OPPONENT));
                let score = self.search(&mut scratch, Mark::HUMAN, 1);
                scratch.set(pos, Square::Empty);
                (pos, score)
            })
            .collect();
        debug_assert_eq!(&scratch, board, "search left residue on the board");
        scores
    }

    /// Returns the best square and its score.
    ///
    /// Equal scores go to the lowest index.
    ///
    /// # Errors
    ///
    /// Returns [`NoMoveAvailable`] when the board is full.
    pub fn best_move(&self, board: &Board) -> Result<(Position, i32), NoMoveAvailable> {
        debug_assert!(
            !rules::evaluate(board).is_terminal() || board.is_full(),
            "opponent asked to move on a finished game"
        );
        self.evaluate_moves(board)
            .into_iter()
            .fold(None, |best: Option<(Position, i32)>, candidate| match best {
                Some(best) if best.1 >= candidate.1 => Some(best),
                _ => Some(candidate),
            })
            .ok_or(NoMoveAvailable)
    }

    /// Recursive search.
    ///
    /// Mutates `board` while exploring and restores every square it
    /// touches before returning.
    fn search(&self, board: &mut Board, to_move: Mark, depth: i32) -> i32 {
        if let Some(score) = self.scoring.terminal(rules::evaluate(board), depth) {
            return score;
        }

        let maximizing = to_move == Mark::OPPONENT;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            board.set(pos, Square::Occupied(to_move));
            let score = self.search(board, to_move.opponent(), depth + 1);
            board.set(pos, Square::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Scoring::DepthScaled)
    }
}

impl Opponent for Minimax {
    #[instrument(skip(self, board), fields(scoring = ?self.scoring))]
    fn choose(&mut self, board: &Board) -> Result<Position, NoMoveAvailable> {
        let (pos, score) = self.best_move(board)?;
        debug!(position = %pos, score, "Minimax chose move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        match self.scoring {
            Scoring::Flat => "Backtracking minimax",
            Scoring::DepthScaled => "Minimax",
        }
    }
}
