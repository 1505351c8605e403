//! Terminal front end for time-travel tic-tac-toe.
//!
//! The [`App`] owns the one [`GameState`](tictactoe_history::GameState);
//! key presses become [`Message`]s, and rendering only reads the app.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod replay;
mod settings;
mod terminal;
mod ui;

pub use app::{App, Direction, Focus, Message, move_cursor};
pub use cli::{Cli, Command};
pub use input::message_for;
pub use replay::{replay, report};
pub use settings::{ConfigError, TuiSettings};
pub use terminal::run_interactive;
pub use ui::{draw, history_label};
