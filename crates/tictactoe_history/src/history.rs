//! Immutable history entries.

use super::action::Move;
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One board snapshot in the game's timeline.
///
/// Entry 0 is the empty starting board and carries no move. Every later
/// entry records the move that produced it from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board as it stood after this step.
    board: Board,
    /// Move that produced this board, `None` for the starting entry.
    last_move: Option<Move>,
}

impl HistoryEntry {
    /// The starting entry: an empty board, no move.
    pub fn origin() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Entry produced by playing `mov`, yielding `board`.
    pub(crate) fn after(board: Board, mov: Move) -> Self {
        Self {
            board,
            last_move: Some(mov),
        }
    }

    /// Zero-based `(row, col)` of the move that produced this entry.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.last_move
            .map(|mov| (mov.position.row(), mov.position.col()))
    }

    /// Label for jumping to this entry when it sits at `step`.
    pub(crate) fn description(&self, step: usize) -> String {
        match self.last_move {
            None => "Go to game start".to_string(),
            Some(_) => format!("Go to move #{}", step),
        }
    }
}
