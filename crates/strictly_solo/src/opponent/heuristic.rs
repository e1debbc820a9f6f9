//! One-ply win/block rule with a random fallback.

use super::Opponent;
use crate::action::NoMoveAvailable;
use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Board, Mark, Square};
use rand::Rng;
use tracing::{debug, instrument};

/// Completes its own two-in-a-row, else blocks the human's, else plays
/// a uniformly random empty square.
///
/// Lines are scanned in [`WINNING_LINES`] order. Within a line the empty
/// square is looked for as `(a, b) -> c`, then `(a, c) -> b`, then
/// `(b, c) -> a`.
#[derive(Debug, Clone)]
pub struct Heuristic<R> {
    rng: R,
}

impl<R: Rng> Heuristic<R> {
    /// Creates a heuristic opponent drawing random moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Finds the square that completes a line where `mark` holds the
    /// other two squares.
    pub fn completion(board: &Board, mark: Mark) -> Option<Position> {
        let held = Square::Occupied(mark);
        WINNING_LINES.iter().find_map(|&[a, b, c]| {
            [(a, b, c), (a, c, b), (b, c, a)]
                .into_iter()
                .find(|&(p, q, gap)| {
                    board.get(p) == held && board.get(q) == held && board.is_empty(gap)
                })
                .map(|(_, _, gap)| gap)
        })
    }
}

impl<R: Rng> Opponent for Heuristic<R> {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board) -> Result<Position, NoMoveAvailable> {
        if let Some(pos) = Self::completion(board, Mark::OPPONENT) {
            debug!(position = %pos, "Heuristic completing own line");
            return Ok(pos);
        }
        if let Some(pos) = Self::completion(board, Mark::HUMAN) {
            debug!(position = %pos, "Heuristic blocking line");
            return Ok(pos);
        }

        let empty = board.empty_positions();
        if empty.is_empty() {
            return Err(NoMoveAvailable);
        }
        let pos = empty[self.rng.gen_range(0..empty.len())];
        debug!(position = %pos, "Heuristic playing random square");
        Ok(pos)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
