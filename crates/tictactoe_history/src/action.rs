//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Each history entry after the
//! first records the move that produced it.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a requested transition was rejected.
///
/// A rejection never changes the game state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The board at the cursor already has a winner or is full.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a square (must be 0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The requested history step does not exist.
    #[display("Step {} is outside the history of {} entries", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of retained history entries.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(mov.to_string(), "O -> Bottom-left");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Center is already occupied"
        );
        assert_eq!(
            MoveError::StepOutOfRange { step: 7, len: 3 }.to_string(),
            "Step 7 is outside the history of 3 entries"
        );
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Position 9 is out of bounds (must be 0-8)"
        );
    }
}
