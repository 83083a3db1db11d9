use std::fmt;

use super::window::{page_range, total_pages, visible_page_window};

/// Which edge-navigation button a [`Control::Nav`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKind {
    First,
    Prev,
    Next,
    Last,
}

impl NavKind {
    pub fn label(self) -> &'static str {
        match self {
            NavKind::First => "«",
            NavKind::Prev => "‹",
            NavKind::Next => "›",
            NavKind::Last => "»",
        }
    }
}

/// One element of the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// First/prev/next/last. `target` may be out of range (e.g. prev on page
    /// 1 targets page 0); such controls are always `disabled`.
    Nav {
        kind: NavKind,
        target: usize,
        disabled: bool,
    },
    /// A numbered page button; `active` marks the current page.
    Page { number: usize, active: bool },
    /// Non-interactive marker for omitted page numbers.
    Ellipsis,
}

impl Control {
    pub fn label(&self) -> String {
        match self {
            Control::Nav { kind, .. } => kind.label().to_string(),
            Control::Page { number, .. } => number.to_string(),
            Control::Ellipsis => "…".to_string(),
        }
    }

    /// Page this control navigates to when activated, or `None` for
    /// ellipses and disabled buttons.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Control::Nav { disabled: true, .. } | Control::Ellipsis => None,
            Control::Nav { target, .. } => Some(target),
            Control::Page { number, .. } => Some(number),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.target().is_some()
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Control::Page { active: true, .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Control::Nav { disabled: true, .. })
    }
}

/// Inputs of a render: everything the view model is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
    pub max_visible_pages: usize,
}

/// Snapshot of what a surface must show for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a, T> {
    /// Items on the current page.
    pub items: &'a [T],
    pub controls: Vec<Control>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Dataset index of `items[0]`.
    pub first_item: usize,
}

/// Derive the items and the control strip for `state` over `data`.
///
/// Strip layout: `« ‹ [pages] › »`. When every page fits within
/// `max_visible_pages` all numbers are listed; otherwise page 1 and the last
/// page are always shown as anchors around the interior window, with an
/// ellipsis wherever numbers are skipped.
///
/// # Panics
///
/// Panics if `state.page_size` is zero. [`PaginatorConfig::validate`]
/// rejects that before a [`Paginator`] ever renders.
///
/// [`PaginatorConfig::validate`]: crate::pagination::PaginatorConfig::validate
/// [`Paginator`]: crate::pagination::Paginator
pub fn compute_view_model<T>(data: &[T], state: PageState) -> ViewModel<'_, T> {
    let total = total_pages(data.len(), state.page_size);
    let current = state.current_page;
    let range = page_range(current, state.page_size, data.len());

    let at_start = current <= 1;
    let at_end = current >= total.max(1);

    // Page buttons never outnumber the pages, whatever max_visible_pages says.
    let mut controls = Vec::with_capacity(total.min(state.max_visible_pages).saturating_add(6));
    controls.push(Control::Nav {
        kind: NavKind::First,
        target: 1,
        disabled: at_start,
    });
    controls.push(Control::Nav {
        kind: NavKind::Prev,
        target: current.saturating_sub(1),
        disabled: at_start,
    });

    let page = |number: usize| Control::Page {
        number,
        active: number == current,
    };

    if total <= state.max_visible_pages {
        controls.extend((1..=total).map(page));
    } else {
        let window = visible_page_window(current, total, state.max_visible_pages);

        controls.push(page(1));
        if window.first().is_some_and(|&first| first > 2) {
            controls.push(Control::Ellipsis);
        }

        controls.extend(window.iter().copied().map(page));

        let last_mid = window.last().copied().unwrap_or(1);
        if last_mid < total {
            if last_mid < total - 1 {
                controls.push(Control::Ellipsis);
            }
            controls.push(page(total));
        }
    }

    controls.push(Control::Nav {
        kind: NavKind::Next,
        target: current.saturating_add(1),
        disabled: at_end,
    });
    controls.push(Control::Nav {
        kind: NavKind::Last,
        target: total,
        disabled: at_end,
    });

    ViewModel {
        items: &data[range.clone()],
        controls,
        current_page: current,
        total_pages: total,
        total_items: data.len(),
        first_item: range.start,
    }
}

/// Plain-text rendering of a control strip, e.g. `« ‹ [1] 2 3 4 … 10 › »`.
/// The active page is bracketed.
pub fn strip_text(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|c| {
            if c.is_active() {
                format!("[{}]", c.label())
            } else {
                c.label()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Page 3 of 10`, or `No pages` for an empty dataset where the cursor
/// points at nothing.
pub fn page_caption(current_page: usize, total_pages: usize) -> String {
    if total_pages == 0 {
        "No pages".to_string()
    } else {
        format!("Page {current_page} of {total_pages}")
    }
}

impl<T> ViewModel<'_, T> {
    pub fn page_caption(&self) -> String {
        page_caption(self.current_page, self.total_pages)
    }
}

impl<T> fmt::Display for ViewModel<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} items)", self.page_caption(), self.total_items)
    }
}
