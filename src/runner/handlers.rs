//! Key and mouse handlers: translate input events into `App` operations.

use ratatui::layout::Rect;
use tracing::trace;

use crate::app::{Action, App};
use crate::input::keyboard::{digit, is_interrupt};
use crate::input::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use crate::ui;

/// Handle one key press. Returns `true` when the app should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(&key) {
        app.should_quit = true;
        return true;
    }
    if let Some(action) = app.keymap.action_for(&key.code) {
        trace!(%action, "key action");
        app.perform(action);
    } else if let Some(d) = digit(&key) {
        app.push_digit(d);
    } else if key.code == KeyCode::Backspace {
        app.pop_digit();
    }
    app.should_quit
}

/// Handle a mouse event given the full terminal area the UI is drawn into.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) {
    match me.kind {
        MouseEventKind::ScrollDown => app.perform(Action::Next),
        MouseEventKind::ScrollUp => app.perform(Action::Prev),
        MouseEventKind::LeftClick => {
            let strip = ui::layout(term).controls_inner();
            if let Some(index) = ui::hit_test(app.controls(), app.size, strip, me.column, me.row) {
                trace!(index, "control clicked");
                app.activate_control(index);
            }
        }
        MouseEventKind::Other => {}
    }
}
