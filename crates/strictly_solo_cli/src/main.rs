//! Strictly Solo - terminal front-end
//!
//! Plays tic-tac-toe against the computer on stdin/stdout.

#![warn(missing_docs)]

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::BufRead;
use std::path::Path;
use strictly_solo::{
    Board, FirstMover, GameConfig, GameSession, Minimax, Position, Scoring, Strategy, TurnReport,
    evaluate,
};
use terminal::TerminalPresenter;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_solo=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: "strictly_solo.toml".into(),
        strategy: None,
        first: None,
        auto_reset_ms: None,
        seed: None,
    }) {
        Command::Play {
            config,
            strategy,
            first,
            auto_reset_ms,
            seed,
        } => {
            let config = load_config(&config, strategy, first, auto_reset_ms, seed)?;
            run_play(&config)
        }
        Command::Suggest {
            board,
            strategy,
            seed,
        } => run_suggest(&board, strategy, seed),
    }
}

/// Loads the config file if present and applies flag overrides.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &Path,
    strategy: Option<Strategy>,
    first: Option<FirstMover>,
    auto_reset_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<GameConfig> {
    let mut config = if path.exists() {
        GameConfig::from_file(path)?
    } else {
        info!("Config file not found, using defaults");
        GameConfig::default()
    };

    if let Some(strategy) = strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(first) = first {
        config = config.with_first_mover(first);
    }
    if auto_reset_ms.is_some() {
        config = config.with_auto_reset_ms(auto_reset_ms);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }

    debug!(?config, "Effective configuration");
    Ok(config)
}

/// Runs the interactive game loop.
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<()> {
    let mut session = GameSession::from_config(config);
    let mut presenter = TerminalPresenter::new();

    println!("Playing against {}.", session.opponent_name());
    println!("Type 1-9 or a square name to move, r to reset, q to quit.");
    session.start(&mut presenter)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "reset" => {
                session.on_reset_requested(&mut presenter)?;
                continue;
            }
            "" => continue,
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unknown square {:?}", input);
            continue;
        };

        match session.on_cell_selected(pos.to_index(), &mut presenter)? {
            TurnReport::Ignored => println!("{} is not available.", pos),
            TurnReport::Continued => {}
            TurnReport::Finished(outcome) => {
                debug!(%outcome, "Game finished");
                if let Some(delay) = session.auto_reset_delay() {
                    std::thread::sleep(delay);
                    session.on_reset_requested(&mut presenter)?;
                } else {
                    println!("Type r to play again.");
                }
            }
        }
    }

    println!("Final score: {}", session.score());
    Ok(())
}

/// Prints the move a strategy picks for `board`.
#[instrument]
fn run_suggest(board: &str, strategy: Strategy, seed: u64) -> Result<()> {
    let board: Board = board.parse()?;
    println!("{}\n", board.display());

    let outcome = evaluate(&board);
    if outcome.is_terminal() {
        anyhow::bail!("Game is already over: {}", outcome);
    }

    let mut opponent = strategy.build(ChaCha8Rng::seed_from_u64(seed));
    let pos = opponent.choose(&board)?;
    println!("{} plays {} (square {})", opponent.name(), pos, pos.to_index() + 1);

    let scoring = match strategy {
        Strategy::Minimax => Some(Scoring::DepthScaled),
        Strategy::FlatMinimax | Strategy::BacktrackingMinimax => Some(Scoring::Flat),
        Strategy::Heuristic => None,
    };
    if let Some(scoring) = scoring {
        for (pos, score) in Minimax::new(scoring).evaluate_moves(&board) {
            println!("  {:>13}: {:+}", pos.label(), score);
        }
    }
    Ok(())
}
