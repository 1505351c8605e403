//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions always run and are the only source of
//! rejections; postconditions run in debug builds.

use super::action::MoveError;
use super::game::GameState;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::position::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cursor's board has no winner and is not full.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names a square.
pub struct InBounds;

impl InBounds {
    /// Resolves `index` to a position or rejects with [`MoveError::OutOfBounds`].
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::from_index(index).ok_or(MoveError::OutOfBounds(index))
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`MoveError::SquareOccupied`] when the square is taken.
    #[instrument(skip(game))]
    pub fn check(position: Position, game: &GameState) -> Result<(), MoveError> {
        if game.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Composite precondition, checked in rejection order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(game))]
    pub fn check(index: usize, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        let position = InBounds::check(index)?;
        SquareIsEmpty::check(position, game)
    }
}

/// Precondition: the step exists in the retained history.
pub struct StepInRange;

impl StepInRange {
    /// Rejects with [`MoveError::StepOutOfRange`] past the last entry.
    #[instrument(skip(game))]
    pub fn check(step: usize, game: &GameState) -> Result<(), MoveError> {
        let len = game.step_count();
        if step < len {
            Ok(())
        } else {
            Err(MoveError::StepOutOfRange { step, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contracts
// ─────────────────────────────────────────────────────────────

/// Runs every history invariant, folding violations into one error.
pub(crate) fn check_invariants(state: &GameState) -> Result<(), MoveError> {
    HistoryInvariants::check_all(state).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "History invariants violated");
        MoveError::InvariantViolation(descriptions)
    })
}

/// Contract for placing a mark at a board index.
///
/// Postconditions:
/// - entries up to the old cursor are unchanged
/// - exactly one entry follows them and the cursor sits on it
/// - history invariants hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let kept = before.cursor() + 1;
        if after.step_count() != kept + 1 || after.cursor() != kept {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} entries with cursor {}, got {} with cursor {}",
                kept + 1,
                kept,
                after.step_count(),
                after.cursor()
            )));
        }
        if after.history()[..kept] != before.history()[..kept] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier entries changed".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for relocating the cursor.
///
/// Postconditions:
/// - the history is identical
/// - history invariants hold
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    fn pre(game: &GameState, step: &usize) -> Result<(), MoveError> {
        StepInRange::check(*step, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if before.history() != after.history() {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: jump altered the history".to_string(),
            ));
        }
        check_invariants(after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        assert!(MoveContract::pre(&game, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new().apply_move(4).expect("legal move");
        assert!(matches!(
            MoveContract::pre(&game, &4),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&GameState::new(), &9),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_precondition_step_range() {
        let game = GameState::replay(&[0, 1]).expect("legal replay");
        assert!(JumpContract::pre(&game, &2).is_ok());
        assert!(JumpContract::pre(&game, &3).is_err());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::replay(&[0, 1, 2]).expect("legal replay");
        let rewound = before.jump_to(1).expect("in range");
        let after = rewound.apply_move(8).expect("legal move");
        assert!(MoveContract::post(&rewound, &after).is_ok());
    }

    #[test]
    fn test_move_postcondition_detects_missing_entry() {
        let before = GameState::new();
        assert!(MoveContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_jump_postcondition_detects_history_change() {
        let before = GameState::replay(&[0]).expect("legal replay");
        let other = GameState::replay(&[4]).expect("legal replay");
        assert!(JumpContract::post(&before, &other).is_err());
        assert!(JumpContract::post(&before, &before.jump_to(0).expect("in range")).is_ok());
    }
}
