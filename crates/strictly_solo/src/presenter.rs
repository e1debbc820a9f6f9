//! Outbound contract to whatever draws the game.
//!
//! The session never touches a screen directly. It calls a [`Presenter`]
//! for every visible change, which keeps the whole turn cycle testable
//! without a terminal or browser.

use crate::position::Position;
use crate::rules::GameOutcome;
use crate::score::ScoreTally;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};

/// Status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the human.
    PlayerTurn,
    /// The opponent is choosing.
    OpponentTurn,
    /// The game ended.
    Finished(GameOutcome),
}

impl Status {
    /// Status for the mark to move in an unfinished game.
    pub fn turn(mark: Mark) -> Self {
        match mark {
            Mark::X => Status::PlayerTurn,
            Mark::O => Status::OpponentTurn,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::PlayerTurn => write!(f, "Player's turn"),
            Status::OpponentTurn => write!(f, "AI's turn"),
            Status::Finished(GameOutcome::Win(Mark::X)) => write!(f, "Player wins!"),
            Status::Finished(GameOutcome::Win(Mark::O)) => write!(f, "AI wins!"),
            Status::Finished(GameOutcome::Tie) => write!(f, "Game is a tie!"),
            Status::Finished(GameOutcome::InProgress) => write!(f, "Game in progress"),
        }
    }
}

/// Receives every visible change the session makes.
pub trait Presenter {
    /// Draws one square.
    fn render_cell(&mut self, position: Position, square: Square);

    /// Shows the status line.
    fn render_status(&mut self, status: &Status);

    /// Shows the running score.
    fn render_score(&mut self, score: &ScoreTally);
}

/// One call made on a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// `render_cell` was called.
    Cell(Position, Square),
    /// `render_status` was called.
    Status(Status),
    /// `render_score` was called.
    Score(ScoreTally),
}

/// Presenter that records calls instead of drawing.
///
/// Useful for headless drivers and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingPresenter {
    calls: Vec<Rendered>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every call in order.
    pub fn calls(&self) -> &[Rendered] {
        &self.calls
    }

    /// Returns the most recent status, if any.
    pub fn last_status(&self) -> Option<Status> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Status(s) => Some(*s),
            _ => None,
        })
    }

    /// Returns the most recent score, if any.
    pub fn last_score(&self) -> Option<ScoreTally> {
        self.calls.iter().rev().find_map(|c| match c {
            Rendered::Score(s) => Some(*s),
            _ => None,
        })
    }

    /// Returns the marks drawn, in order.
    pub fn marks_drawn(&self) -> Vec<(Position, Mark)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Rendered::Cell(pos, Square::Occupied(mark)) => Some((*pos, *mark)),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn render_cell(&mut self, position: Position, square: Square) {
        self.calls.push(Rendered::Cell(position, square));
    }

    fn render_status(&mut self, status: &Status) {
        self.calls.push(Rendered::Status(*status));
    }

    fn render_score(&mut self, score: &ScoreTally) {
        self.calls.push(Rendered::Score(*score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::PlayerTurn.to_string(), "Player's turn");
        assert_eq!(Status::turn(Mark::O).to_string(), "AI's turn");
        assert_eq!(
            Status::Finished(GameOutcome::Win(Mark::X)).to_string(),
            "Player wins!"
        );
        assert_eq!(Status::Finished(GameOutcome::Win(Mark::O)).to_string(), "AI wins!");
        assert_eq!(Status::Finished(GameOutcome::Tie).to_string(), "Game is a tie!");
    }
}
