//! Command-line interface for tictactoe.

use crate::replay::MoveArg;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on the terminal board
    Play,

    /// Apply moves to a fresh game and print the result
    Replay {
        /// Print a JSON snapshot instead of the board
        #[arg(long)]
        json: bool,

        /// Moves as ROW,COL (0-2), X first
        #[arg(required = true)]
        moves: Vec<MoveArg>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_parses_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--json", "0,0", "1,1"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                json: true,
                moves: vec![MoveArg { row: 0, col: 0 }, MoveArg { row: 1, col: 1 }],
            })
        );
    }

    #[test]
    fn test_replay_rejects_garbage() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "middle"]).is_err());
    }
}
