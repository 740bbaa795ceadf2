use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::app::{Action, Mode};

/// Poll for terminal events with timeout
pub fn poll_event(timeout_ms: u64) -> anyhow::Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a terminal event into an action for the current mode
pub fn map_event(mode: Mode, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            Mode::Capturing => map_capturing(key),
            Mode::Viewing => map_viewing(key),
        },
        Event::Paste(text) if mode == Mode::Capturing => Some(Action::Insert(text)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

fn map_capturing(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('r') if ctrl => Some(Action::Reset),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab => Some(Action::ToggleView),
        KeyCode::Backspace | KeyCode::Delete => Some(Action::DeleteBack),
        KeyCode::Up => Some(Action::IncreaseSize),
        KeyCode::Down => Some(Action::DecreaseSize),
        KeyCode::Char(c)
            if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(Action::Insert(c.to_string()))
        }
        _ => None,
    }
}

fn map_viewing(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::ToggleView),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Up | KeyCode::Char('+') => Some(Action::IncreaseSize),
        KeyCode::Down | KeyCode::Char('-') => Some(Action::DecreaseSize),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(Action::NextChunk),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::PrevChunk),
        KeyCode::PageDown | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::PageUp | KeyCode::Char('k') => Some(Action::ScrollUp),
        _ => None,
    }
}
