//! Interactive two-pane splitter: paste text on top, page through parts below.
//!
//! State lives in [`App`] and only changes through [`App::update`]; the view is
//! a pure function of the state and an immutable [`Theme`].

mod app;
mod event;
mod theme;
mod ui;


pub use app::{Action, App, Mode, SizeLimits};
pub use event::map_event;
pub use theme::Theme;
pub use ui::render;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

/// Take over the terminal and run until the user quits
pub fn run(app: App, theme: &Theme) -> Result<()> {
    // ratatui::init handles raw mode + alternate screen
    let terminal = ratatui::init();

    let result = execute!(std::io::stdout(), EnableBracketedPaste)
        .context("Failed to enable bracketed paste")
        .and_then(|()| run_app(terminal, app, theme));

    // Restore terminal (always, even on error)
    if let Err(e) = execute!(std::io::stdout(), DisableBracketedPaste) {
        warn!(error = %e, "failed to disable bracketed paste");
    }
    ratatui::restore();

    result
}

fn run_app(mut terminal: DefaultTerminal, mut app: App, theme: &Theme) -> Result<()> {
    let size = terminal.size()?;
    app.update(Action::Resize(size.width, size.height));
    info!(chunk_size = app.chunk_size, "interactive session started");

    loop {
        terminal.draw(|frame| render(frame, &app, theme))?;

        if app.should_quit {
            break;
        }

        if let Some(evt) = event::poll_event(100)? {
            if let Some(action) = map_event(app.mode, evt) {
                app.update(action);
            }
        }
    }

    info!(parts = app.chunks.len(), "interactive session ended");
    Ok(())
}
