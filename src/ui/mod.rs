use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{Action, App};

pub mod colors;
pub mod controls;
pub mod items;
pub mod surface;
pub mod themes;

pub use colors::Colors;
pub use controls::{hit_test, strip_layout, ControlRegion, ControlSize, PageControls};
pub use items::draw_items;
pub use surface::TerminalSurface;
pub use themes::{Theme, ThemeError};

/// Screen regions of the pager, shared by drawing and mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    pub header: Rect,
    pub items: Rect,
    pub controls: Rect,
    pub help: Rect,
}

impl UiAreas {
    /// Row inside the bordered controls block where the strip is drawn.
    pub fn controls_inner(&self) -> Rect {
        controls_block().inner(self.controls)
    }
}

pub fn layout(area: Rect) -> UiAreas {
    // header (1), items (min), controls (3), help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    UiAreas {
        header: chunks[0],
        items: chunks[1],
        controls: chunks[2],
        help: chunks[3],
    }
}

fn controls_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn help_text(app: &App) -> String {
    let km = &app.keymap;
    format!(
        "{}:first  {}:prev  {}:next  {}:last  {}:focus  {}:open  0-9:jump  {}:quit",
        km.describe(Action::First),
        km.describe(Action::Prev),
        km.describe(Action::Next),
        km.describe(Action::Last),
        [km.describe(Action::FocusLeft), km.describe(Action::FocusRight)].join("/"),
        km.describe(Action::Activate),
        km.describe(Action::Quit),
    )
}

/// Draw one frame of the pager.
pub fn ui(f: &mut Frame, app: &App) {
    let areas = layout(f.area());
    let surface = app.pager.surface();
    let colors = &app.colors;

    // header: range summary, plus the typed page number or a status message
    let mut header = vec![Span::styled(surface.range_summary(), colors.header_style)];
    if !app.jump.is_empty() {
        header.push(Span::styled(format!("  Go to page: {}", app.jump), colors.status_style));
    } else if let Some(status) = &app.status {
        header.push(Span::styled(format!("  {status}"), colors.status_style));
    }
    f.render_widget(Paragraph::new(Line::from(header)).style(colors.block_style), areas.header);

    draw_items(f, areas.items, surface, colors);

    let strip = PageControls::new(&surface.controls, colors)
        .size(app.size)
        .focused(app.focus)
        .block(controls_block().style(colors.block_style));
    f.render_widget(strip, areas.controls);

    f.render_widget(
        Paragraph::new(help_text(app)).style(colors.help_style),
        areas.help,
    );
}
