//! Monotonic board invariant: each entry adds exactly one mark.

use super::Invariant;
use crate::GameState;

/// Invariant: every entry after the first is its predecessor plus one mark.
///
/// The recorded move must target a square that was empty in the previous
/// entry, and applying it to that board must give exactly the stored board.
/// Squares therefore never change once set.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            match next.last_move() {
                Some(mov) => {
                    prev.board().is_empty(mov.position)
                        && prev.board().with_mark(mov.position, mov.player) == *next.board()
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}
