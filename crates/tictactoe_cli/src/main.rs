//! Terminal driver for the tic-tac-toe core.
//!
//! This is the presentation collaborator: it holds the single current
//! [`GameState`] value, issues one core operation per user action, and
//! renders whatever state comes back. All rules live in `tictactoe_core`.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_core::{decide_move, start_game, submit_move, GameMode, GameState, Player};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = cli::Cli::parse();
    let vs_ai = args.vs_ai || args.ai_first;
    let mode = if vs_ai {
        GameMode::VsAI
    } else {
        GameMode::PlayerVsPlayer
    };
    // X always moves first in the core; when the automated opponent goes
    // first, the human side is mapped onto O.
    let automated: Option<Player> = vs_ai.then(|| {
        if args.ai_first {
            Player::X
        } else {
            Player::O
        }
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let state = play_one_game(mode, automated, &mut lines)?;
        report(&state);
        if !prompt_yes_no("Play again? [y/N] ", &mut lines)? {
            return Ok(());
        }
    }
}

/// Runs a single game to a terminal state and returns it.
fn play_one_game(
    mode: GameMode,
    automated: Option<Player>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<GameState> {
    let mut state = start_game(mode, automated != Some(Player::X));

    while !state.status().is_terminal() {
        println!("\n{}\n", state.board().display());

        if automated == Some(state.current_player()) {
            debug!(player = %state.current_player(), "automated turn");
            println!("{} is thinking...", state.current_player());
            state = decide_move(&state);
            continue;
        }

        let Some((row, col)) = read_move(state.current_player(), lines)? else {
            continue;
        };
        match submit_move(&state, row, col) {
            Ok(next) => state = next,
            Err(err) => println!("{err}"),
        }
    }

    println!("\n{}\n", state.board().display());
    Ok(state)
}

/// Prompts the current player for a `row col` pair.
///
/// Returns `None` when the line did not parse, so the caller re-prompts.
fn read_move(
    player: Player,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<(usize, usize)>> {
    print!("{player} to move (row col): ");
    io::stdout().flush().context("flushing prompt")?;

    let line = lines
        .next()
        .context("input closed before the game ended")?
        .context("reading move")?;
    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Ok(Some((row, col))),
        _ => {
            println!("Enter two numbers between 0 and 2, e.g. `1 1`.");
            Ok(None)
        }
    }
}

fn report(state: &GameState) {
    match state.status().winner() {
        Some(winner) => println!("{winner} wins!"),
        None => println!("Draw."),
    }
}

fn prompt_yes_no(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    match lines.next() {
        Some(line) => Ok(line.context("reading answer")?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
