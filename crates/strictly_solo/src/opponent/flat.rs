//! Minimax over an immutable board and the list of open squares.
//!
//! Terminal positions score a flat ±10, so a win ten plies away looks as
//! good as one on the next move. Kept as a weaker play mode.

use super::Opponent;
use super::minimax::Scoring;
use crate::action::NoMoveAvailable;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// Flat-scored minimax that copies the board at every ply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlatMinimax;

impl FlatMinimax {
    /// Scores every open square as the opponent's next move.
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Position, i32)> {
        let open = board.empty_positions();
        open.iter()
            .enumerate()
            .map(|(i, &pos)| {
                let (next, rest) = Self::play(board, &open, i, Mark::OPPONENT);
                (pos, Self::search(&next, &rest, Mark::HUMAN))
            })
            .collect()
    }

    /// Places `mark` on the `i`th open square of a copy of `board`.
    fn play(board: &Board, open: &[Position], i: usize, mark: Mark) -> (Board, Vec<Position>) {
        let mut next = *board;
        next.set(open[i], Square::Occupied(mark));
        let rest = open
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, pos)| *pos)
            .collect();
        (next, rest)
    }

    fn search(board: &Board, open: &[Position], to_move: Mark) -> i32 {
        if let Some(score) = Scoring::Flat.terminal(rules::evaluate(board), 0) {
            return score;
        }

        let scores = (0..open.len()).map(|i| {
            let (next, rest) = Self::play(board, open, i, to_move);
            Self::search(&next, &rest, to_move.opponent())
        });
        if to_move == Mark::OPPONENT {
            scores.max().unwrap_or(0)
        } else {
            scores.min().unwrap_or(0)
        }
    }
}

impl Opponent for FlatMinimax {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board) -> Result<Position, NoMoveAvailable> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.evaluate_moves(board) {
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        let (pos, score) = best.ok_or(NoMoveAvailable)?;
        debug!(position = %pos, score, "Flat minimax chose move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "Flat minimax"
    }
}
