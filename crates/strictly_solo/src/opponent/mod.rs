//! Computer opponent strategies.
//!
//! Every strategy answers the same question: given a board where the
//! opponent is to move, which empty square should it take. They range
//! from a one-ply win/block rule up to exhaustive minimax.

mod flat;
mod heuristic;
mod minimax;

pub use flat::FlatMinimax;
pub use heuristic::Heuristic;
pub use minimax::{Minimax, Scoring};

use crate::action::NoMoveAvailable;
use crate::position::Position;
use crate::types::Board;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that picks the opponent's move.
pub trait Opponent {
    /// Chooses an empty square for the opponent's mark.
    ///
    /// The board must not be terminal.
    ///
    /// # Errors
    ///
    /// Returns [`NoMoveAvailable`] when every square is occupied.
    fn choose(&mut self, board: &Board) -> Result<Position, NoMoveAvailable>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Selectable opponent strategy, weakest first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Complete or block a two-in-a-row, otherwise play randomly.
    Heuristic,
    /// Minimax with flat scores over the list of open squares.
    FlatMinimax,
    /// Minimax with flat scores, backtracking in place on the board.
    BacktrackingMinimax,
    /// Minimax preferring faster wins and slower losses.
    #[default]
    Minimax,
}

impl Strategy {
    /// Builds the opponent for this strategy.
    ///
    /// `rng` is only consumed by strategies that play randomly.
    #[instrument(skip(rng))]
    pub fn build(self, rng: ChaCha8Rng) -> Box<dyn Opponent> {
        match self {
            Strategy::Heuristic => Box::new(Heuristic::new(rng)),
            Strategy::FlatMinimax => Box::new(FlatMinimax),
            Strategy::BacktrackingMinimax => Box::new(Minimax::new(Scoring::Flat)),
            Strategy::Minimax => Box::new(Minimax::new(Scoring::DepthScaled)),
        }
    }
}
