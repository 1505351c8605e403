//! Origin invariant: history starts from an empty board.

use super::Invariant;
use crate::{GameState, HistoryEntry};

/// Invariant: entry 0 exists and is the empty board with no move.
pub struct OriginEmptyInvariant;

impl Invariant<GameState> for OriginEmptyInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&HistoryEntry::origin())
    }

    fn description() -> &'static str {
        "History starts from an empty board"
    }
}
