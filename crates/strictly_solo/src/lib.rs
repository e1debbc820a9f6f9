//! Strictly Solo - tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] owns the board, enforces turn order and derives
//!   the [`GameOutcome`] after every move
//! - **Opponent**: [`Opponent`] strategies, from a one-ply win/block rule
//!   up to depth-aware [`Minimax`]
//! - **Session**: [`GameSession`] runs consecutive games, keeps the
//!   [`ScoreTally`] and talks to the screen only through a [`Presenter`]
//!
//! # Example
//!
//! ```
//! use strictly_solo::{FirstMover, GameSession, RecordingPresenter, ResetPolicy, Strategy};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let opponent = Strategy::Minimax.build(ChaCha8Rng::seed_from_u64(0));
//! let mut session = GameSession::new(
//!     opponent,
//!     FirstMover::Human,
//!     ResetPolicy::Manual,
//!     ChaCha8Rng::seed_from_u64(0),
//! );
//! let mut presenter = RecordingPresenter::new();
//! session.start(&mut presenter)?;
//! session.on_cell_selected(4, &mut presenter)?;
//! assert_eq!(session.game().history().len(), 2);
//! # Ok::<(), strictly_solo::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod game;
mod invariants;
mod opponent;
mod position;
mod presenter;
mod rules;
mod score;
mod session;
mod settings;
mod types;

// Crate-level exports - Board and moves
pub use action::{Move, MoveError, NoMoveAvailable};
pub use position::Position;
pub use types::{Board, BoardParseError, Mark, Square};

// Crate-level exports - Rules
pub use rules::{
    GameOutcome, WINNING_LINES, WinningLine, check_winner, evaluate, is_full, is_tie,
    winning_line,
};

// Crate-level exports - Engine and invariants
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant,
};

// Crate-level exports - Opponents
pub use opponent::{FlatMinimax, Heuristic, Minimax, Opponent, Scoring, Strategy};

// Crate-level exports - Session
pub use config::{ConfigError, GameConfig};
pub use presenter::{Presenter, RecordingPresenter, Rendered, Status};
pub use score::ScoreTally;
pub use session::{GameSession, SessionError, TurnReport};
pub use settings::{FirstMover, ResetPolicy};
