//! Game settings: who opens each game and what happens after it ends.

use crate::types::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::instrument;

/// Which side makes the first move of a new game.
///
/// Defaults to [`FirstMover::Human`] so the player moves first.
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
pub enum FirstMover {
    /// The human always opens.
    #[default]
    Human,
    /// The computer always opens.
    Opponent,
    /// A fair coin decides before every game.
    Random,
}

impl FirstMover {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Player",
            Self::Opponent => "AI",
            Self::Random => "Coin toss",
        }
    }

    /// Picks the mark that opens the next game.
    #[instrument(skip(rng))]
    pub fn pick<R: Rng>(self, rng: &mut R) -> Mark {
        match self {
            Self::Human => Mark::HUMAN,
            Self::Opponent => Mark::OPPONENT,
            Self::Random if rng.gen_bool(0.5) => Mark::HUMAN,
            Self::Random => Mark::OPPONENT,
        }
    }
}

/// What the session does once a game reaches a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Wait for an explicit reset request.
    #[default]
    Manual,
    /// Start a new game after the delay.
    After(Duration),
}

impl ResetPolicy {
    /// Builds a policy from an optional delay in milliseconds.
    pub fn from_millis(millis: Option<u64>) -> Self {
        millis.map_or(Self::Manual, |ms| Self::After(Duration::from_millis(ms)))
    }

    /// Returns the delay before an automatic reset, if any.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Manual => None,
            Self::After(delay) => Some(delay),
        }
    }
}
