//! First-class invariants for a tic-tac-toe game.
//!
//! Invariants are logical properties that must hold throughout a game.
//! The engine checks them after every move in debug builds, and each one
//! is testable on its own.

mod alternating_turn;
mod history_consistent;
mod mark_balance;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ];

        let violations: Vec<_> = checks
            .iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(*description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every game invariant as a composable set.
pub type GameInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    MarkBalanceInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Mark, Move, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&Game::new(Mark::X)).is_ok());
        assert!(GameInvariants::check_all(&Game::new(Mark::O)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Mark::O, Position::TopLeft),
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopRight),
        ];
        let game = Game::replay(Mark::O, &moves).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::new(Mark::X);
        game.board.set(Position::TopLeft, Square::Occupied(Mark::O));
        game.board.set(Position::TopRight, Square::Occupied(Mark::O));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&HistoryConsistentInvariant::description()));
        assert!(descriptions.contains(&MarkBalanceInvariant::description()));
    }
}
