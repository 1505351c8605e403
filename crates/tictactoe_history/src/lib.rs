//! Tic-tac-toe with time travel.
//!
//! The game is an immutable timeline of board snapshots plus a cursor.
//! Playing a move appends a snapshot after the cursor (dropping any entries
//! beyond it); jumping only moves the cursor.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameState, GameStatus, Player};
//!
//! let game = GameState::replay(&[0, 3, 1, 4, 2])?;
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! let rewound = game.jump_to(0)?;
//! assert_eq!(rewound.status(), GameStatus::InProgress(Player::X));
//! # Ok::<(), tictactoe_history::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use contracts::{
    Contract, GameNotOver, InBounds, JumpContract, LegalMove, MoveContract, SquareIsEmpty,
    StepInRange,
};
pub use game::GameState;
pub use history::HistoryEntry;
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, GameStatus, Player, Square};
