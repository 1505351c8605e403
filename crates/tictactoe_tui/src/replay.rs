//! Non-interactive replay of a move list.

use crate::ui::history_label;
use tictactoe_history::{GameState, MoveError};
use tracing::{info, instrument};

/// Replays `moves` from a fresh game, then jumps to `jump` when given.
///
/// # Errors
///
/// The first rejected move or an out-of-range jump.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>) -> Result<GameState, MoveError> {
    let game = GameState::replay(moves)?;
    let game = match jump {
        Some(step) => game.jump_to(step)?,
        None => game,
    };
    info!(steps = game.step_count(), cursor = game.cursor(), "Replay complete");
    Ok(game)
}

/// Plain-text report: board, status, then the history with the cursor marked.
pub fn report(game: &GameState, show_coordinates: bool) -> String {
    let mut out = game.current_board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str("\n\n");
    for step in 0..game.step_count() {
        if let Some(label) = history_label(game, step, show_coordinates) {
            let marker = if step == game.cursor() { '*' } else { ' ' };
            out.push(marker);
            out.push(' ');
            out.push_str(&label);
            out.push('\n');
        }
    }
    out
}
