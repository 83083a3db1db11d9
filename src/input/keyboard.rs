// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Ctrl+C always quits, regardless of the configured keymap.
pub fn is_interrupt(ev: &KeyEvent) -> bool {
    ev.modifiers.contains(KeyModifiers::CONTROL) && matches!(ev.code, KeyCode::Char('c'))
}

/// Page-number digits typed for a direct jump.
pub fn digit(ev: &KeyEvent) -> Option<char> {
    match ev.code {
        KeyCode::Char(c) if c.is_ascii_digit() && !ev.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(c)
        }
        _ => None,
    }
}
