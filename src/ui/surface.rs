use std::fmt::Display;

use crate::pagination::{Control, Surface, ViewModel};

/// Terminal-side copy of the last applied view model.
///
/// ratatui redraws whole frames on demand, so instead of drawing inside
/// [`Surface::apply`] this surface keeps owned copies of the page's items and
/// controls for the next frame to render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TerminalSurface {
    pub items: Vec<String>,
    pub controls: Vec<Control>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub first_item: usize,
    /// Number of view models applied so far.
    pub renders: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Showing 11–20 of 95" style summary for the header.
    pub fn range_summary(&self) -> String {
        if self.items.is_empty() {
            return "No items".to_string();
        }
        format!(
            "Showing {}–{} of {}",
            self.first_item + 1,
            self.first_item + self.items.len(),
            self.total_items
        )
    }
}

impl<T: Display> Surface<T> for TerminalSurface {
    fn apply(&mut self, view: &ViewModel<'_, T>) {
        self.items = view.items.iter().map(ToString::to_string).collect();
        self.controls = view.controls.clone();
        self.current_page = view.current_page;
        self.total_pages = view.total_pages;
        self.total_items = view.total_items;
        self.first_item = view.first_item;
        self.renders += 1;
    }
}
