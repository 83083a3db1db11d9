//! Terminal input, normalised into crate-level event types so handlers and
//! tests do not depend on crossterm's event structs directly.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{is_interrupt, KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseEvent, MouseEventKind};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Events the runner reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Release/repeat events are reported on some platforms; only
            // presses count as input.
            Event::Key(key) if key.kind == KeyEventKind::Press => InputEvent::Key(key),
            Event::Mouse(me) => InputEvent::Mouse(me.into()),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, blocking until one arrives.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(event::read()?.into())
}
