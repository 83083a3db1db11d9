use std::fmt;

use tracing::{debug, trace};

use super::config::PaginatorConfig;
use super::surface::Surface;
use super::view_model::{compute_view_model, PageState, ViewModel};
use super::window::{page_range, total_pages, visible_page_window};
use crate::errors::PaginationError;

type PageChangeCallback = Box<dyn FnMut(usize)>;

/// Outcome of a [`Paginator::go_to_page`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The target was in range; the paginator re-rendered.
    Changed { from: usize, to: usize },
    /// The target was out of range and nothing happened.
    Ignored,
}

impl Navigation {
    pub fn is_changed(&self) -> bool {
        matches!(self, Navigation::Changed { .. })
    }
}

/// Paginated view over an owned, immutable dataset.
///
/// The paginator holds the current-page cursor and is the only place it
/// changes. Every render recomputes the [`ViewModel`], hands it to the
/// surface and then notifies the page-change callback with the current page.
///
/// An empty dataset has zero pages; the cursor stays at 1 and every
/// navigation request is ignored.
pub struct Paginator<T, S> {
    items: Vec<T>,
    config: PaginatorConfig,
    current_page: usize,
    surface: S,
    on_page_change: PageChangeCallback,
}

impl<T, S: Surface<T>> Paginator<T, S> {
    /// Validate `config`, start at page 1 and perform the initial render.
    pub fn new(items: Vec<T>, config: PaginatorConfig, surface: S) -> Result<Self, PaginationError> {
        Self::with_callback(items, config, surface, Box::new(|_| {}))
    }

    fn with_callback(
        items: Vec<T>,
        config: PaginatorConfig,
        surface: S,
        on_page_change: PageChangeCallback,
    ) -> Result<Self, PaginationError> {
        config.validate()?;
        let mut paginator = Paginator {
            items,
            config,
            current_page: 1,
            surface,
            on_page_change,
        };
        debug!(
            items = paginator.items.len(),
            page_size = config.page_size,
            max_visible_pages = config.max_visible_pages,
            total_pages = paginator.total_pages(),
            "paginator created"
        );
        paginator.render();
        Ok(paginator)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.config.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn config(&self) -> PaginatorConfig {
        self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items on the current page; shorter than the page size only on the
    /// last page.
    pub fn current_page_items(&self) -> &[T] {
        &self.items[page_range(self.current_page, self.config.page_size, self.items.len())]
    }

    /// Interior page numbers for the current page, or empty when every page
    /// fits in the strip.
    pub fn visible_page_window(&self) -> Vec<usize> {
        visible_page_window(
            self.current_page,
            self.total_pages(),
            self.config.max_visible_pages,
        )
    }

    fn page_state(&self) -> PageState {
        PageState {
            current_page: self.current_page,
            page_size: self.config.page_size,
            max_visible_pages: self.config.max_visible_pages,
        }
    }

    pub fn view_model(&self) -> ViewModel<'_, T> {
        compute_view_model(&self.items, self.page_state())
    }

    /// Redraw items and controls on the surface, then fire the callback.
    pub fn render(&mut self) {
        let view = compute_view_model(&self.items, self.page_state());
        trace!(page = view.current_page, controls = view.controls.len(), "render");
        self.surface.apply(&view);
        (self.on_page_change)(self.current_page);
    }

    /// Move to `target` and re-render.
    ///
    /// Targets outside `1..=total_pages` are ignored: the cursor does not
    /// move, nothing is rendered and the callback is not fired.
    pub fn go_to_page(&mut self, target: usize) -> Navigation {
        let total = self.total_pages();
        if target < 1 || target > total {
            debug!(target, total_pages = total, "ignoring out-of-range page");
            return Navigation::Ignored;
        }
        let from = self.current_page;
        self.current_page = target;
        self.render();
        Navigation::Changed { from, to: target }
    }

    /// Like [`go_to_page`](Self::go_to_page) but reports out-of-range
    /// targets. Returns the new current page.
    pub fn try_go_to_page(&mut self, target: usize) -> Result<usize, PaginationError> {
        match self.go_to_page(target) {
            Navigation::Changed { to, .. } => Ok(to),
            Navigation::Ignored => Err(PaginationError::PageOutOfRange {
                page: target,
                total_pages: self.total_pages(),
            }),
        }
    }

    pub fn first(&mut self) -> Navigation {
        self.go_to_page(1)
    }

    pub fn prev(&mut self) -> Navigation {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> Navigation {
        self.go_to_page(self.current_page + 1)
    }

    pub fn last(&mut self) -> Navigation {
        self.go_to_page(self.total_pages())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<T, S: fmt::Debug> fmt::Debug for Paginator<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("items", &self.items.len())
            .field("config", &self.config)
            .field("current_page", &self.current_page)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

/// Builder mirroring the construction options: page size and max visible
/// pages default when left unset, the page-change callback defaults to a
/// no-op.
pub struct PaginatorBuilder<T> {
    items: Vec<T>,
    page_size: Option<usize>,
    max_visible_pages: Option<usize>,
    on_page_change: Option<PageChangeCallback>,
}

impl<T> PaginatorBuilder<T> {
    pub fn new(items: Vec<T>) -> Self {
        PaginatorBuilder {
            items,
            page_size: None,
            max_visible_pages: None,
            on_page_change: None,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.max_visible_pages = Some(max_visible_pages);
        self
    }

    /// Apply a whole config at once, e.g. one merged from settings.
    pub fn config(self, config: PaginatorConfig) -> Self {
        self.page_size(config.page_size)
            .max_visible_pages(config.max_visible_pages)
    }

    pub fn on_page_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Validate, construct and perform the initial render into `surface`.
    pub fn build<S: Surface<T>>(self, surface: S) -> Result<Paginator<T, S>, PaginationError> {
        let config = PaginatorConfig::from_options(self.page_size, self.max_visible_pages);
        let callback = self.on_page_change.unwrap_or_else(|| Box::new(|_| {}));
        Paginator::with_callback(self.items, config, surface, callback)
    }
}
