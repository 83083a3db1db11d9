use crossterm::event::{MouseButton, MouseEvent as CtMouseEvent, MouseEventKind as CtKind};

/// Mouse input reduced to what the pager reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEventKind {
    LeftClick,
    ScrollUp,
    ScrollDown,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl From<CtMouseEvent> for MouseEvent {
    fn from(me: CtMouseEvent) -> Self {
        let kind = match me.kind {
            CtKind::Down(MouseButton::Left) => MouseEventKind::LeftClick,
            CtKind::ScrollUp => MouseEventKind::ScrollUp,
            CtKind::ScrollDown => MouseEventKind::ScrollDown,
            _ => MouseEventKind::Other,
        };
        MouseEvent {
            column: me.column,
            row: me.row,
            kind,
        }
    }
}
