//! End-of-game invariant: nothing follows a finished board.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: only the last entry may hold a won or full board.
pub struct FrozenAfterEndInvariant;

impl Invariant<GameState> for FrozenAfterEndInvariant {
    fn holds(game: &GameState) -> bool {
        match game.history().split_last() {
            Some((_, earlier)) => earlier.iter().all(|entry| {
                rules::check_winner(entry.board()).is_none() && !rules::is_full(entry.board())
            }),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move follows a won or drawn board"
    }
}
