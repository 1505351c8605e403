//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_history::Position;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Squares in play order, comma-separated: indices (0-8) or labels such as `center`
        #[arg(short, long, value_delimiter = ',', value_parser = parse_square)]
        moves: Vec<Position>,

        /// History step to move the cursor to after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The selected command, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

/// Accepts a board index or a position label, case-insensitively.
fn parse_square(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a square (use 0-8 or a label like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_is_the_default_command() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("valid arguments");
        assert_eq!(cli.command(), Command::Play);
    }

    #[test]
    fn test_replay_moves_accept_indices_and_labels() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "replay",
            "--moves",
            "0,center,Bottom-right",
            "--jump",
            "1",
        ])
        .expect("valid arguments");

        assert_eq!(
            cli.command(),
            Command::Replay {
                moves: vec![Position::TopLeft, Position::Center, Position::BottomRight],
                jump: Some(1),
                json: false,
            }
        );
    }

    #[test]
    fn test_replay_rejects_unknown_square() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "--moves", "0,nowhere"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "replay", "--moves", "9"]).is_err());
    }
}
