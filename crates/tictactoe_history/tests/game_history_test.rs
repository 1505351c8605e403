//! Tests for the history-backed game state.

use tictactoe_history::{
    Board, GameState, GameStatus, MoveError, Player, Position, Square, check_winner,
};

#[test]
fn test_occupied_cell_never_changes_board() {
    let game = GameState::replay(&[4]).expect("legal replay");
    let before = game.current_board();

    assert_eq!(
        game.apply_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.current_board(), before);
    assert_eq!(game.step_count(), 2);
}

#[test]
fn test_next_player_alternates_from_x() {
    let mut game = GameState::new();
    let mut expected = Player::X;

    for index in [4, 0, 8, 2, 6, 3, 5, 7] {
        assert_eq!(game.status(), GameStatus::InProgress(expected));
        game = game.apply_move(index).expect("legal move");
        expected = expected.opponent();
    }
}

#[test]
fn test_jump_then_move_discards_future() {
    let game = GameState::replay(&[0, 4, 8, 1, 7]).expect("legal replay");
    assert_eq!(game.step_count(), 6);

    for k in 0..game.step_count() - 1 {
        let rewound = game.jump_to(k).expect("in range");
        let square = Position::valid_moves(&rewound.current_board())[0];
        let branched = rewound.play(square).expect("legal move");

        assert_eq!(branched.step_count(), k + 2);
        assert_eq!(branched.cursor(), k + 1);
        assert_eq!(branched.history()[..=k], game.history()[..=k]);
    }
}

#[test]
fn test_no_line_after_five_moves() {
    let game = GameState::replay(&[0, 4, 8, 1, 7]).expect("legal replay");
    assert_eq!(check_winner(&game.current_board()), None);
    assert_eq!(game.status(), GameStatus::InProgress(Player::O));
}

#[test]
fn test_top_row_win_freezes_board() {
    let game = GameState::replay(&[0, 3, 1, 4, 2]).expect("legal replay");
    assert_eq!(check_winner(&game.current_board()), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );

    let before = game.current_board();
    for index in 0..9 {
        assert_eq!(game.apply_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(game.current_board(), before);
}

#[test]
fn test_jump_to_start_resets_view() {
    for moves in [&[][..], &[4][..], &[0, 3, 1, 4, 2][..]] {
        let game = GameState::replay(moves).expect("legal replay");
        let start = game.jump_to(0).expect("in range");

        assert_eq!(start.current_board(), Board::new());
        assert_eq!(start.next_player(), Player::X);
        assert_eq!(start.step_count(), moves.len() + 1);
    }
}

#[test]
fn test_revisiting_before_win_reopens_play() {
    let won = GameState::replay(&[0, 3, 1, 4, 2]).expect("legal replay");
    let rewound = won.jump_to(4).expect("in range");

    assert_eq!(rewound.status(), GameStatus::InProgress(Player::X));
    let diverted = rewound.apply_move(8).expect("legal move");
    assert_eq!(diverted.step_count(), 6);
    assert_eq!(diverted.winner(), None);
}

#[test]
fn test_draw_detected() {
    // X O X / X O O / O X X
    let game = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal replay");
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.apply_move(0), Err(MoveError::GameOver));
    assert!(game.valid_moves().is_empty());
}

#[test]
fn test_replay_stops_at_first_rejection() {
    assert_eq!(
        GameState::replay(&[0, 1, 0]),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(GameState::replay(&[11]), Err(MoveError::OutOfBounds(11)));
}

#[test]
fn test_history_entries_are_snapshots() {
    let game = GameState::replay(&[4, 0]).expect("legal replay");
    let entries = game.history();

    assert_eq!(entries[0].board(), &Board::new());
    assert_eq!(entries[1].board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(entries[1].board().get(Position::TopLeft), Square::Empty);
    assert_eq!(entries[2].board().get(Position::TopLeft), Square::Occupied(Player::O));
    assert_eq!(entries[2].location(), Some((0, 0)));
    assert_eq!(game.describe(2).as_deref(), Some("Go to move #2"));
}
