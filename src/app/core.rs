use tracing::info;

use crate::app::settings::Keymap;
use crate::errors::PaginationError;
use crate::pagination::{Control, Paginator, PaginatorBuilder, PaginatorConfig};
use crate::ui::{Colors, ControlSize, TerminalSurface};

mod navigation;

/// Interactive pager state: the paginator plus everything the terminal UI
/// layers on top of it (focus, typed page number, status line, styling).
pub struct App {
    pub pager: Paginator<String, TerminalSurface>,
    /// Index into the control strip of the focused control.
    pub focus: Option<usize>,
    /// Digits typed for a direct jump, not yet submitted.
    pub jump: String,
    /// One-line message shown under the controls (e.g. a rejected jump).
    pub status: Option<String>,
    pub colors: Colors,
    pub size: ControlSize,
    pub keymap: Keymap,
    pub should_quit: bool,
}

impl App {
    /// Build the pager over `items` and render the first page.
    pub fn new(items: Vec<String>, config: PaginatorConfig) -> Result<Self, PaginationError> {
        let pager = PaginatorBuilder::new(items)
            .config(config)
            .on_page_change(|page| info!(page, "page shown"))
            .build(TerminalSurface::new())?;
        let mut app = App {
            pager,
            focus: None,
            jump: String::new(),
            status: None,
            colors: Colors::default(),
            size: ControlSize::default(),
            keymap: Keymap::default(),
            should_quit: false,
        };
        app.focus_active();
        Ok(app)
    }

    pub fn with_colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Controls as last applied to the terminal surface.
    pub fn controls(&self) -> &[Control] {
        &self.pager.surface().controls
    }

    pub fn focused_control(&self) -> Option<&Control> {
        self.focus.and_then(|i| self.controls().get(i))
    }

    /// Put focus on the active page button, or on the first interactive
    /// control when no page is active (empty dataset).
    pub(crate) fn focus_active(&mut self) {
        let controls = self.controls();
        let focus = controls
            .iter()
            .position(Control::is_active)
            .or_else(|| controls.iter().position(Control::is_interactive));
        self.focus = focus;
    }
}
