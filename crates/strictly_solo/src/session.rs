//! Single-player session controller.
//!
//! A `GameSession` owns the board, the score tally and the opponent for
//! as long as the player keeps playing. Input arrives as discrete events
//! (a cell was selected, a reset was requested), each handled to
//! completion before the next one, and every visible change goes out
//! through a [`Presenter`].

use crate::action::{Move, MoveError, NoMoveAvailable};
use crate::config::GameConfig;
use crate::game::Game;
use crate::opponent::Opponent;
use crate::position::Position;
use crate::presenter::{Presenter, Status};
use crate::rules::GameOutcome;
use crate::score::ScoreTally;
use crate::settings::{FirstMover, ResetPolicy};
use crate::types::{Mark, Square};
use derive_more::{Display, Error, From};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What handling a cell selection did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReport {
    /// The selection was not a legal human move and changed nothing.
    Ignored,
    /// Both sides moved (or the human did) and the game goes on.
    Continued,
    /// The game reached a terminal outcome.
    Finished(GameOutcome),
}

/// The opponent could not complete its turn.
///
/// Both cases mean the session broke its own turn contract.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The opponent was asked to move on a full board.
    #[display("{}", _0)]
    NoMove(NoMoveAvailable),
    /// The opponent's chosen move was rejected.
    #[display("Opponent move rejected: {}", _0)]
    Rejected(MoveError),
}

/// A session of consecutive games against one opponent.
pub struct GameSession {
    game: Game,
    score: ScoreTally,
    opponent: Box<dyn Opponent>,
    first_mover: FirstMover,
    reset_policy: ResetPolicy,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Creates a session. Call [`GameSession::start`] before accepting input.
    pub fn new(
        opponent: Box<dyn Opponent>,
        first_mover: FirstMover,
        reset_policy: ResetPolicy,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            game: Game::default(),
            score: ScoreTally::new(),
            opponent,
            first_mover,
            reset_policy,
            rng,
        }
    }

    /// Creates a session from configuration.
    #[instrument(skip(config), fields(strategy = %config.strategy()))]
    pub fn from_config(config: &GameConfig) -> Self {
        let seed = (*config.seed()).unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let opponent = config
            .strategy()
            .build(ChaCha8Rng::seed_from_u64(rng.r#gen()));
        info!(seed, opponent = opponent.name(), "Session created");
        Self::new(opponent, *config.first_mover(), config.reset_policy(), rng)
    }

    /// Starts the first game.
    pub fn start(&mut self, presenter: &mut dyn Presenter) -> Result<(), SessionError> {
        self.on_reset_requested(presenter)
    }

    /// Clears the board and starts a new game.
    ///
    /// If the opponent opens, it moves before this returns.
    #[instrument(skip(self, presenter))]
    pub fn on_reset_requested(&mut self, presenter: &mut dyn Presenter) -> Result<(), SessionError> {
        let first = self.first_mover.pick(&mut self.rng);
        self.game.reset(first);
        info!(first = %first, "New game");

        for pos in Position::ALL {
            presenter.render_cell(pos, Square::Empty);
        }
        presenter.render_score(&self.score);
        presenter.render_status(&Status::turn(first));

        if first == Mark::OPPONENT {
            self.opponent_turn(presenter)?;
        }
        Ok(())
    }

    /// Handles the human selecting the square at `index` (0-8).
    ///
    /// Selections out of range, on an occupied square, out of turn or
    /// after the game ended are ignored. A legal move is answered by the
    /// opponent within the same call unless it ended the game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] only if the opponent fails to move.
    #[instrument(skip(self, presenter))]
    pub fn on_cell_selected(
        &mut self,
        index: usize,
        presenter: &mut dyn Presenter,
    ) -> Result<TurnReport, SessionError> {
        let Some(pos) = Position::from_index(index) else {
            debug!(index, "Ignoring selection outside the board");
            return Ok(TurnReport::Ignored);
        };

        let outcome = match self.commit(Move::new(Mark::HUMAN, pos), presenter) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Ignoring selection");
                return Ok(TurnReport::Ignored);
            }
        };
        if outcome.is_terminal() {
            return Ok(TurnReport::Finished(outcome));
        }

        let outcome = self.opponent_turn(presenter)?;
        Ok(if outcome.is_terminal() {
            TurnReport::Finished(outcome)
        } else {
            TurnReport::Continued
        })
    }

    /// Lets the opponent choose and play its move.
    fn opponent_turn(&mut self, presenter: &mut dyn Presenter) -> Result<GameOutcome, SessionError> {
        debug_assert!(!self.game.is_over(), "opponent asked to move after the game ended");
        debug_assert_eq!(self.game.to_move(), Mark::OPPONENT, "opponent moved out of turn");

        let pos = self.opponent.choose(self.game.board())?;
        debug!(opponent = self.opponent.name(), position = %pos, "Opponent moves");
        Ok(self.commit(Move::new(Mark::OPPONENT, pos), presenter)?)
    }

    /// Applies a move and renders its effects.
    fn commit(&mut self, mv: Move, presenter: &mut dyn Presenter) -> Result<GameOutcome, MoveError> {
        let outcome = self.game.apply_move(mv)?;
        presenter.render_cell(mv.position, Square::Occupied(mv.mark));

        if outcome.is_terminal() {
            self.score.record(outcome);
            info!(outcome = %outcome, score = %self.score, "Game over");
            presenter.render_status(&Status::Finished(outcome));
            presenter.render_score(&self.score);
        } else {
            presenter.render_status(&Status::turn(self.game.to_move()));
        }
        Ok(outcome)
    }

    /// Returns how long to wait before resetting, once the game is over
    /// and the session resets on its own.
    pub fn auto_reset_delay(&self) -> Option<Duration> {
        if self.game.is_over() {
            self.reset_policy.delay()
        } else {
            None
        }
    }

    /// Returns true when the human may select a square.
    pub fn awaiting_human(&self) -> bool {
        !self.game.is_over() && self.game.to_move() == Mark::HUMAN
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running score.
    pub fn score(&self) -> &ScoreTally {
        &self.score
    }

    /// Returns the opponent's display name.
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }

    /// Returns the first-mover policy.
    pub fn first_mover(&self) -> FirstMover {
        self.first_mover
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("game", &self.game)
            .field("score", &self.score)
            .field("opponent", &self.opponent.name())
            .field("first_mover", &self.first_mover)
            .field("reset_policy", &self.reset_policy)
            .finish()
    }
}

