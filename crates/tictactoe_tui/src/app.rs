//! Application state and message handling.
//!
//! [`App`] is the single owner of the [`GameState`]. Views only read it;
//! every change arrives as a [`Message`] through [`App::update`].

use tictactoe_history::{GameState, Position};
use tracing::{debug, info, instrument, warn};

use crate::settings::TuiSettings;

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The history list.
    History,
}

/// A request to change application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Place a mark under the board cursor.
    PlaceAtCursor,
    /// Place a mark at a specific square.
    Place(Position),
    /// Switch focus between board and history.
    ToggleFocus,
    /// Highlight the previous history entry.
    SelectPrevious,
    /// Highlight the next history entry.
    SelectNext,
    /// Jump to the highlighted history entry.
    JumpToSelected,
    /// Jump to a specific history step.
    Jump(usize),
    /// Start a fresh game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Moves a board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    notice: Option<String>,
    history_visible: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_game(GameState::new())
    }

    /// Creates an application around an existing game.
    #[instrument(skip(game))]
    pub fn with_game(game: GameState) -> Self {
        let selected_step = game.cursor();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step,
            notice: None,
            history_visible: true,
            should_quit: false,
        }
    }

    /// Creates an application with a fresh game, shaped by `settings`.
    ///
    /// With the history panel hidden, focus never leaves the board.
    #[instrument(skip_all)]
    pub fn from_settings(settings: &TuiSettings) -> Self {
        Self {
            history_visible: *settings.show_history(),
            ..Self::new()
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history step.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status line: the last rejection if any, else the game status.
    pub fn status_line(&self) -> String {
        match &self.notice {
            Some(notice) => notice.clone(),
            None => self.game.status().to_string(),
        }
    }

    /// Applies a message.
    ///
    /// A rejection notice lasts until the next message.
    #[instrument(skip(self), fields(step = self.game.cursor()))]
    pub fn update(&mut self, message: Message) {
        debug!(?message, "Handling message");
        self.notice = None;

        match message {
            Message::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Message::PlaceAtCursor => self.place(self.cursor),
            Message::Place(position) => {
                self.cursor = position;
                self.place(position);
            }
            Message::ToggleFocus if !self.history_visible => {
                debug!("History panel hidden, focus stays on the board");
            }
            Message::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected_step = self.game.cursor();
            }
            Message::SelectPrevious => {
                self.selected_step = self.selected_step.saturating_sub(1);
            }
            Message::SelectNext => {
                let last = self.game.step_count() - 1;
                self.selected_step = (self.selected_step + 1).min(last);
            }
            Message::JumpToSelected => self.jump(self.selected_step),
            Message::Jump(step) => self.jump(step),
            Message::Restart => {
                info!("Restarting game");
                self.game = GameState::new();
                self.selected_step = 0;
                self.focus = Focus::Board;
            }
            Message::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        match self.game.play(position) {
            Ok(next) => {
                self.game = next;
                self.selected_step = self.game.cursor();
                info!(%position, status = %self.game.status(), "Mark placed");
            }
            Err(e) => {
                warn!(error = %e, %position, "Move rejected");
                self.notice = Some(e.to_string());
            }
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(next) => {
                self.game = next;
                self.selected_step = step;
                info!(step, "Jumped in history");
            }
            Err(e) => {
                warn!(error = %e, step, "Jump rejected");
                self.notice = Some(e.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
    }

    #[test]
    fn test_toggle_focus_selects_cursor_step() {
        let mut app = App::new();
        app.update(Message::Place(Position::Center));
        app.update(Message::Place(Position::TopLeft));
        app.update(Message::ToggleFocus);

        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_hidden_history_keeps_board_focus() {
        let settings: TuiSettings = toml::from_str("show_history = false").expect("valid toml");
        let mut app = App::from_settings(&settings);
        app.update(Message::Place(Position::Center));
        app.update(Message::ToggleFocus);

        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_notice_clears_on_next_message() {
        let mut app = App::new();
        app.update(Message::Place(Position::Center));
        app.update(Message::Place(Position::Center));
        assert_eq!(app.status_line(), "Center is already occupied");

        app.update(Message::MoveCursor(Direction::Left));
        assert_eq!(app.status_line(), "Next player: O");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = App::new();
        app.update(Message::Place(Position::Center));
        app.update(Message::SelectNext);
        app.update(Message::SelectNext);
        assert_eq!(app.selected_step(), 1);

        for _ in 0..3 {
            app.update(Message::SelectPrevious);
        }
        assert_eq!(app.selected_step(), 0);
    }
}
