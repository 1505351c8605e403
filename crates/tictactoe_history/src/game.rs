//! History-backed game state.
//!
//! [`GameState`] is a value: every transition returns a new state and leaves
//! the old one untouched. Rejected transitions return an error and the caller
//! keeps the state it already had.

use super::action::{Move, MoveError};
use super::contracts::{Contract, InBounds, JumpContract, MoveContract, check_invariants};
use super::history::HistoryEntry;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board history plus a cursor into it.
///
/// The player to move is derived from the cursor: even steps are X's,
/// odd steps O's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRecord")]
pub struct GameState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl GameState {
    /// Creates a new game: one empty entry, cursor at the start.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::origin()],
            cursor: 0,
        }
    }

    /// Plays the current player's mark at board index `index` (0-8).
    ///
    /// Entries after the cursor are discarded before the new entry is
    /// appended, so playing from a revisited step drops the abandoned branch.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] when the cursor's board is won or full
    /// - [`MoveError::OutOfBounds`] when `index > 8`
    /// - [`MoveError::SquareOccupied`] when the square is taken
    #[instrument(skip(self), fields(cursor = self.cursor, player = %self.next_player()))]
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        MoveContract::pre(self, &index)?;
        let position = InBounds::check(index)?;

        let player = self.next_player();
        let mov = Move::new(player, position);
        let board = self.current_board().with_mark(position, player);

        let mut entries = self.entries[..=self.cursor].to_vec();
        let discarded = self.entries.len() - entries.len();
        entries.push(HistoryEntry::after(board, mov));
        let next = Self {
            cursor: entries.len() - 1,
            entries,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%mov, discarded, step = next.cursor, "Move applied");
        Ok(next)
    }

    /// Plays the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::apply_move`].
    pub fn play(&self, position: Position) -> Result<Self, MoveError> {
        self.apply_move(position.to_index())
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// [`MoveError::StepOutOfRange`] when `step` is past the last entry.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.entries.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, MoveError> {
        JumpContract::pre(self, &step)?;

        let next = Self {
            entries: self.entries.clone(),
            cursor: step,
        };

        #[cfg(debug_assertions)]
        JumpContract::post(self, &next)?;

        debug!(step, "Cursor relocated");
        Ok(next)
    }

    /// Replays board indices from a fresh game.
    ///
    /// # Errors
    ///
    /// The first rejected move's error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(), |game, index| game.apply_move(*index))
    }

    /// Board at the cursor.
    pub fn current_board(&self) -> Board {
        *self.current_entry().board()
    }

    /// History entry at the cursor.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Player whose turn it is at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.cursor)
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All retained history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Jump label for the entry at `step`, or `None` past the last entry.
    pub fn describe(&self, step: usize) -> Option<String> {
        self.entries.get(step).map(|entry| entry.description(step))
    }

    /// Number of retained history entries (always at least one).
    pub fn step_count(&self) -> usize {
        self.entries.len()
    }

    /// True when the cursor sits on the newest entry.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.entries.len()
    }

    /// Winner on the cursor's board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_entry().board())
    }

    /// Completed line on the cursor's board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(self.current_entry().board()).map(|(_, line)| line)
    }

    /// Empty squares on the cursor's board, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.current_entry().board())
        }
    }

    /// Game status at the cursor.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_entry().board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unvalidated wire form of [`GameState`].
#[derive(Debug, Deserialize)]
struct GameStateRecord {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = MoveError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let state = Self {
            entries: record.entries,
            cursor: record.cursor,
        };
        check_invariants(&state)?;
        Ok(state)
    }
}

#[cfg(test)]
impl GameState {
    /// Builds a state without any checks, for exercising invariants.
    pub(crate) fn from_parts(entries: Vec<HistoryEntry>, cursor: usize) -> Self {
        Self { entries, cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_describe_labels_each_step() {
        let game = GameState::replay(&[4, 0]).expect("legal replay");
        assert_eq!(game.describe(0).as_deref(), Some("Go to game start"));
        assert_eq!(game.describe(2).as_deref(), Some("Go to move #2"));
        assert_eq!(game.describe(3), None);
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.step_count(), 1);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.current_board(), Board::new());
        assert_eq!(game.status(), GameStatus::InProgress(Player::X));
        assert!(game.is_at_latest());
    }

    #[test]
    fn test_apply_move_appends_and_flips() {
        let game = GameState::new().apply_move(4).expect("legal move");
        assert_eq!(game.step_count(), 2);
        assert_eq!(game.cursor(), 1);
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.next_player(), Player::O);
    }

    #[test]
    fn test_apply_move_keeps_previous_state() {
        let before = GameState::new();
        let after = before.apply_move(0).expect("legal move");
        assert_eq!(before, GameState::new());
        assert_ne!(before, after);
    }

    #[test]
    fn test_rejection_order() {
        let won = GameState::replay(&[0, 3, 1, 4, 2]).expect("legal replay");
        // Game over wins over both bounds and occupancy.
        assert_eq!(won.apply_move(42), Err(MoveError::GameOver));
        assert_eq!(won.apply_move(0), Err(MoveError::GameOver));

        let game = GameState::new().apply_move(0).expect("legal move");
        assert_eq!(game.apply_move(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(
            game.apply_move(0),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_jump_keeps_history() {
        let game = GameState::replay(&[0, 4, 8]).expect("legal replay");
        let jumped = game.jump_to(1).expect("in range");
        assert_eq!(jumped.history(), game.history());
        assert_eq!(jumped.cursor(), 1);
        assert_eq!(jumped.next_player(), Player::O);
        assert!(!jumped.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = GameState::replay(&[0, 4]).expect("legal replay");
        assert_eq!(
            game.jump_to(3),
            Err(MoveError::StepOutOfRange { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_valid_moves_empty_once_over() {
        let won = GameState::replay(&[0, 3, 1, 4, 2]).expect("legal replay");
        assert!(won.valid_moves().is_empty());
        assert_eq!(won.jump_to(4).expect("in range").valid_moves().len(), 5);
    }
}
