//! Cursor invariant: the cursor addresses a retained entry.

use super::Invariant;
use crate::GameState;

/// Invariant: `cursor < history length`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a retained history entry"
    }
}
