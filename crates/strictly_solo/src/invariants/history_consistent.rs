//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::{Game, Square};

/// Invariant: Every occupied square has exactly one matching history entry.
///
/// No moves are missing, and no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == game.history().len()
            && game
                .history()
                .iter()
                .all(|mv| game.board().get(mv.position) == Square::Occupied(mv.mark))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
