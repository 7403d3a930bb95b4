//! Tic-tac-toe - terminal host
//!
//! Interactive play against a friend or the computer, plus a one-shot
//! position analyser.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::time::Duration;
use tictactoe_cli::cli::{Cli, Command};
use tictactoe_cli::{GameMode, GameSession, Settings};
use tictactoe_engine::{Board, GameState, Player, Position, evaluate, find_best_move, score_moves};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            seed,
            think_ms,
            config,
        } => {
            let settings = Settings::load_or_default(&config)
                .with_context(|| format!("Failed to load {}", config.display()))?
                .with_overrides(mode, difficulty, seed, think_ms);
            run_play(settings)
        }
        Command::Hint { board, to_move } => run_hint(board, to_move),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all, fields(mode = %settings.mode(), difficulty = %settings.difficulty()))]
fn run_play(settings: Settings) -> Result<()> {
    info!("Starting game");
    let mut session = GameSession::new(&settings);
    let think = Duration::from_millis(*settings.think_ms());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    print_intro(&session)?;

    let mut lines = stdin.lock().lines();
    loop {
        if session.is_computer_turn() {
            std::thread::sleep(think);
            let index = session.play_opponent()?;
            let label = Position::from_index(index).map_or("?", |p| p.label());
            writeln!(stdout, "\nComputer plays {}", label)?;
            print_board(&session)?;
            continue;
        }

        if session.state().is_in_progress() {
            write!(stdout, "{} > ", session.status_message())?;
        } else {
            write!(stdout, "Type 'restart' or 'quit' > ")?;
        }
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let input = line.trim().to_lowercase();

        match input.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "restart" | "r" => {
                session.restart();
                writeln!(stdout, "\nNew game")?;
                print_board(&session)?;
            }
            "help" | "?" => print_help()?,
            other => match Position::from_label_or_number(other) {
                Some(pos) => match session.play_human(pos.to_index()) {
                    Ok(()) => print_board(&session)?,
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(stdout, "{}", e)?;
                    }
                },
                None => writeln!(stdout, "Unknown square {:?}; type 'help'", other)?,
            },
        }
    }

    info!("Goodbye");
    Ok(())
}

fn print_intro(session: &GameSession) -> Result<()> {
    let mut stdout = std::io::stdout();
    match session.mode() {
        GameMode::Pvp => writeln!(stdout, "Two players: X moves first.")?,
        GameMode::Pve => writeln!(
            stdout,
            "You are X against the computer ({}).",
            session.difficulty()
        )?,
    }
    print_help()?;
    print_board(session)
}

fn print_help() -> Result<()> {
    writeln!(
        std::io::stdout(),
        "Enter a square as 0-8 or a name like 'center' or 'top left'. \
         Commands: restart, quit."
    )?;
    Ok(())
}

fn print_board(session: &GameSession) -> Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(stdout, "\n{}\n", session.state().board().display())?;
    if !session.state().is_in_progress() {
        writeln!(stdout, "{}", session.status_message())?;
    }
    Ok(())
}

/// Print the evaluation and the optimal move for a position
#[instrument(skip(board), fields(board = %board))]
fn run_hint(board: Board, to_move: Player) -> Result<()> {
    let state = GameState::from_parts(board, to_move).context("Unreachable position")?;
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}\n", board.display())?;
    writeln!(stdout, "Outcome: {}", evaluate(&board))?;
    if !state.is_in_progress() {
        return Ok(());
    }

    for (index, score) in score_moves(&state) {
        writeln!(stdout, "  {} ({}): {:+}", index, Position::ALL[index], score)?;
    }
    let best = find_best_move(&state)?;
    writeln!(stdout, "Best move for {}: {}", to_move, best)?;
    Ok(())
}
