use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::navigation::Signal;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Signal(Signal),
    /// Terminal size changed; the current page needs laying out again.
    Resize,
}

/// Block until the next event the presentation cares about.
pub fn read_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        // Windows reports releases too; presses and held-key repeats move the slides
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event).map(TuiEvent::Signal)
        }
        Event::Resize(columns, rows) => {
            log::debug!("Resized to {}x{}", columns, rows);
            Some(TuiEvent::Resize)
        }
        _ => None,
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<Signal> {
    const PLAIN: KeyModifiers = KeyModifiers::NONE;
    const SHIFT: KeyModifiers = KeyModifiers::SHIFT;

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Signal::Quit),
        (PLAIN | SHIFT, KeyCode::Char('Q' | 'q')) | (_, KeyCode::Esc) => Some(Signal::Quit),

        (_, KeyCode::Right | KeyCode::Enter | KeyCode::PageDown) => Some(Signal::Advance),
        (PLAIN | SHIFT, KeyCode::Char(' ' | 'l' | 'n')) => Some(Signal::Advance),

        (_, KeyCode::Left | KeyCode::Backspace | KeyCode::PageUp) => Some(Signal::Retreat),
        (PLAIN | SHIFT, KeyCode::Char('h' | 'p')) => Some(Signal::Retreat),

        _ => None,
    }
}
