//! Mark balance invariant: mark counts never drift apart.

use super::Invariant;
use crate::{Game, Mark};

/// Invariant: The number of X and O marks differs by at most one.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x.abs_diff(o) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
