//! Keyboard mapping.

use crate::app::{Direction, Focus, Message};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_history::Position;

/// Maps a key press to a message for the focused panel.
///
/// Releases and repeats are ignored so each press acts once.
pub fn message_for(key: KeyEvent, focus: Focus) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('r') => Some(Message::Restart),
        KeyCode::Char('g') => Some(Message::Jump(0)),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::ToggleFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Message::Place),
        code => match focus {
            Focus::Board => board_message(code),
            Focus::History => history_message(code),
        },
    }
}

fn board_message(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Message::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Message::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::PlaceAtCursor),
        _ => None,
    }
}

fn history_message(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::JumpToSelected),
        _ => None,
    }
}
