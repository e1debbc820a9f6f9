//! Running win counts across games in one session.

use crate::rules::GameOutcome;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins for each side since the session started.
///
/// Ties are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Games the human has won.
    human_wins: u32,
    /// Games the computer opponent has won.
    opponent_wins: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Only wins change the tally.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Some(Mark::X) => self.human_wins += 1,
            Some(Mark::O) => self.opponent_wins += 1,
            None => {}
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} - {} AI", self.human_wins, self.opponent_wins)
    }
}
