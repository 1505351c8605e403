//! Tests for the non-interactive replay command.

use tictactoe_history::MoveError;
use tictactoe_tui::{replay, report};

#[test]
fn test_report_marks_cursor_and_status() {
    let game = replay(&[0, 3, 1, 4, 2], None).expect("legal replay");
    let text = report(&game, true);

    assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner: X\n\n"));
    assert!(text.contains("  Go to game start\n"));
    assert!(text.contains("* Go to move #5 (1, 3)\n"));
}

#[test]
fn test_jump_moves_cursor_in_report() {
    let game = replay(&[4, 0], Some(1)).expect("legal replay");
    let text = report(&game, false);

    assert!(text.contains("Next player: O"));
    assert!(text.contains("* Go to move #1\n"));
    assert!(text.contains("  Go to move #2\n"));
}

#[test]
fn test_rejections_surface_as_errors() {
    assert_eq!(replay(&[4, 4], None), Err(MoveError::SquareOccupied(tictactoe_history::Position::Center)));
    assert_eq!(
        replay(&[4], Some(2)),
        Err(MoveError::StepOutOfRange { step: 2, len: 2 })
    );
}
