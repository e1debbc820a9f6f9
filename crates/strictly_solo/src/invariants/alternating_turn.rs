//! Alternating turn invariant: marks alternate starting with the first mover.

use super::Invariant;
use crate::Game;

/// Invariant: Marks alternate turns.
///
/// The history starts with the game's first mover and never repeats a
/// mark twice in a row. While the game is in progress the mark to move
/// is the one history implies.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.mark != game.first()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match history.last() {
            None => game.to_move() == game.first(),
            Some(last) if game.is_over() => game.to_move() == last.mark,
            Some(last) => game.to_move() == last.mark.opponent(),
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns starting with the first mover"
    }
}
