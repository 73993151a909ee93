//! Conversion from crossterm events to form keys.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::trace;
use signup_form::render::{Key, Modifiers};

/// Events the front end reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key, Modifiers),
    Resize { width: u16, height: u16 },
}

/// Convert crossterm KeyModifiers to form Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert crossterm KeyCode to form Key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::BackTab => Some(Key::BackTab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent. Key releases are dropped.
pub fn convert_key_event(event: KeyEvent) -> Option<Event> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let key = convert_key(event.code)?;
    Some(Event::Key(key, convert_modifiers(event.modifiers)))
}

pub fn convert_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) => convert_key_event(key),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        other => {
            trace!("Ignoring event: {:?}", other);
            None
        }
    }
}
