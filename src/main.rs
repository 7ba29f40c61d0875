//! Minimax Tic-Tac-Toe - Unified CLI
//!
//! Play against the computer, watch it play itself, or analyze a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use minimax_tictactoe::{
    Analysis, Board, Console, ConsoleConfig, ConsolePlayer, Game, HumanPlayer, Mark, MinimaxPlayer,
    Move, Orchestrator, Outcome,
};
use serde::Serialize;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    init_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play { human: None }) {
        Command::Play { human } => run_play(config, human),
        Command::SelfPlay => run_self_play(config),
        Command::Analyze { board, json } => run_analyze(board, json),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// Human against the computer, game after game until the human stops.
#[instrument(skip(config))]
fn run_play(config: ConsoleConfig, human: Option<Mark>) -> Result<()> {
    let config = match human {
        Some(mark) => config.with_human_mark(mark),
        None => config,
    };
    let human = *config.human_mark();
    info!(%human, "Starting console game");

    let you: Box<dyn ConsolePlayer> = Box::new(HumanPlayer::new("You"));
    let computer: Box<dyn ConsolePlayer> = Box::new(MinimaxPlayer::new("Computer"));
    let (player_x, player_o) = match human {
        Mark::X => (you, computer),
        Mark::O => (computer, you),
    };
    let mut orchestrator = Orchestrator::new(player_x, player_o)
        .with_human(human)
        .with_empty_glyph(*config.empty_glyph());

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut console = Console::new(&mut input, &mut output);

    loop {
        let outcome = orchestrator.run(&mut console)?;
        info!(%outcome, "Game finished");
        if !console.confirm_play_again()? {
            break;
        }
        orchestrator.restart();
    }
    Ok(())
}

/// Computer against itself from the empty board.
#[instrument(skip(config))]
fn run_self_play(config: ConsoleConfig) -> Result<()> {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("Computer X")),
        Box::new(MinimaxPlayer::new("Computer O")),
    )
    .with_empty_glyph(*config.empty_glyph());

    let mut input = io::empty();
    let mut output = io::stdout().lock();
    let mut console = Console::new(&mut input, &mut output);

    let outcome = orchestrator.run(&mut console)?;
    info!(%outcome, moves = orchestrator.game().history().len(), "Self-play finished");
    Ok(())
}

/// Position report printed by `analyze`.
#[derive(Debug, Serialize)]
struct Report {
    board: String,
    to_move: Mark,
    outcome: Outcome,
    legal_moves: Vec<Move>,
    analysis: Option<Analysis>,
}

#[instrument]
fn run_analyze(board: Board, json: bool) -> Result<()> {
    let mut game = Game::from_board(board);
    let report = Report {
        board: game.board().to_string(),
        to_move: game.to_move(),
        outcome: game.outcome(),
        legal_moves: game.legal_moves(),
        analysis: game.analyze(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", report.board);
    println!("To move: {}", report.to_move);
    println!("Outcome: {}", report.outcome);
    let legal: Vec<String> = report.legal_moves.iter().map(Move::to_string).collect();
    println!("Legal moves: {}", legal.join(", "));
    match report.analysis {
        Some(analysis) => println!(
            "Best move: {} (score {}, {} positions searched)",
            analysis.best_move(),
            analysis.score(),
            analysis.nodes()
        ),
        None => println!("No move: the game is over."),
    }
    Ok(())
}
