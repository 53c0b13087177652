//! Command-line interface for the tic-tac-toe driver.

use clap::Parser;

/// Tic-tac-toe - local two-player or versus an optimal automated opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play against the automated opponent instead of a second human
    #[arg(long)]
    pub vs_ai: bool,

    /// Let the automated opponent move first (implies --vs-ai)
    #[arg(long)]
    pub ai_first: bool,
}
