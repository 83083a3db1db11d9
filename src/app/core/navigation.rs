use super::*;

use crate::app::types::Action;
use crate::pagination::Navigation;

impl App {
    /// Navigate to `page`. Out-of-range pages are ignored like any other
    /// paginator navigation; on success focus follows the active page.
    pub fn go_to(&mut self, page: usize) -> Navigation {
        let nav = self.pager.go_to_page(page);
        if nav.is_changed() {
            self.status = None;
            self.focus_active();
        }
        nav
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::First => {
                self.go_to(1);
            }
            Action::Prev => {
                self.go_to(self.pager.current_page().saturating_sub(1));
            }
            Action::Next => {
                self.go_to(self.pager.current_page() + 1);
            }
            Action::Last => {
                self.go_to(self.pager.total_pages());
            }
            Action::FocusLeft => self.focus_prev(),
            Action::FocusRight => self.focus_next(),
            Action::Activate => self.activate(),
            Action::Clear => {
                self.jump.clear();
                self.status = None;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Move focus to the next interactive control to the right, if any.
    pub fn focus_next(&mut self) {
        let start = self.focus.map_or(0, |i| i + 1);
        if let Some(offset) = self.controls()[start.min(self.controls().len())..]
            .iter()
            .position(Control::is_interactive)
        {
            self.focus = Some(start + offset);
        }
    }

    /// Move focus to the previous interactive control to the left, if any.
    pub fn focus_prev(&mut self) {
        let end = self.focus.unwrap_or(0).min(self.controls().len());
        if let Some(index) = self.controls()[..end]
            .iter()
            .rposition(Control::is_interactive)
        {
            self.focus = Some(index);
        }
    }

    /// Submit a typed page number if there is one, otherwise activate the
    /// focused control.
    pub fn activate(&mut self) {
        if !self.jump.is_empty() {
            self.submit_jump();
            return;
        }
        if let Some(index) = self.focus {
            self.activate_control(index);
        }
    }

    /// Activate the control at `index` in the strip. Ellipses and disabled
    /// controls do nothing.
    pub fn activate_control(&mut self, index: usize) -> Navigation {
        match self.controls().get(index).and_then(Control::target) {
            Some(page) => self.go_to(page),
            None => Navigation::Ignored,
        }
    }

    pub fn push_digit(&mut self, digit: char) {
        // Longer inputs cannot name a page anyway.
        if digit.is_ascii_digit() && self.jump.len() < 19 {
            self.jump.push(digit);
        }
    }

    pub fn pop_digit(&mut self) {
        self.jump.pop();
    }

    /// Jump to the typed page. Unlike button navigation, a rejected jump is
    /// reported on the status line.
    pub fn submit_jump(&mut self) {
        let typed = std::mem::take(&mut self.jump);
        let Ok(page) = typed.parse::<usize>() else {
            return;
        };
        match self.pager.try_go_to_page(page) {
            Ok(_) => {
                self.status = None;
                self.focus_active();
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }
}
