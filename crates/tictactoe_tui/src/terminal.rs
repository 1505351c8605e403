//! Interactive terminal session.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::input::message_for;
use crate::settings::TuiSettings;
use crate::ui;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including a failed setup
/// and a panic while drawing. A loop error takes precedence over a restore
/// error.
#[instrument(skip_all)]
pub fn run_interactive(settings: &TuiSettings) -> Result<()> {
    info!("Starting interactive session");

    install_panic_hook();
    let guard = TerminalGuard::enter()?;

    let mut app = App::from_settings(settings);
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_loop(&mut terminal, &mut app, settings));

    let restored = guard.release();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = %err, "Failed to restore terminal");
    }
    info!("Interactive session finished");
    res.and(restored.map_err(anyhow::Error::from))
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    settings: &TuiSettings,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app, settings))?;

        if let Event::Key(key) = event::read()? {
            match message_for(key, app.focus()) {
                Some(message) => app.update(message),
                None => debug!(?key, "Unmapped key"),
            }
        }
    }
    Ok(())
}

/// Raw mode plus the alternate screen, undone when dropped.
struct TerminalGuard {
    released: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure still leaves raw mode through Drop.
        let guard = Self { released: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// Restores the terminal and reports the first failure.
    fn release(mut self) -> io::Result<()> {
        self.released = true;
        restore(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.released {
            let _ = restore(&mut io::stdout());
        }
    }
}

/// Leaves raw mode and the alternate screen, attempting both steps even when
/// the first fails.
fn restore(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Restores the terminal before the default hook prints the panic, so the
/// message lands on the normal screen.
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore(&mut io::stdout());
        hook(info);
    }));
}
