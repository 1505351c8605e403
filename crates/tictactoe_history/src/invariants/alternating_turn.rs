//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the move stored at entry `i` was made by the player owning
/// step `i - 1`, so the first move is X's and turns strictly alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match entry.last_move() {
                Some(mov) => mov.player == Player::for_step(step - 1),
                None => true,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
