//! Terminal presenter: draws the board and status lines on stdout.

use std::io::Write;
use strictly_solo::{Board, Position, Presenter, ScoreTally, Square, Status};
use tracing::warn;

/// Draws to stdout, redrawing the board after each status change.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    board: Board,
}

impl TerminalPresenter {
    /// Creates a presenter with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    fn print(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", text) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl Presenter for TerminalPresenter {
    fn render_cell(&mut self, position: Position, square: Square) {
        self.board.set(position, square);
    }

    fn render_status(&mut self, status: &Status) {
        self.print(&format!("\n{}\n\n{}", self.board.display(), status));
    }

    fn render_score(&mut self, score: &ScoreTally) {
        self.print(&format!("Score: {}", score));
    }
}
