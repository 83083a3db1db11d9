use serde::Deserialize;

use crate::errors::PaginationError;

/// Items per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Page-count threshold above which the strip collapses into a window.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Construction-time configuration for a [`Paginator`](super::Paginator).
///
/// Both values are fixed for the lifetime of the paginator. Use
/// [`PaginatorConfig::validate`] (called by the paginator constructors) to
/// reject zero values up front instead of failing later during rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    pub page_size: usize,
    pub max_visible_pages: usize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        PaginatorConfig {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
        }
    }
}

impl PaginatorConfig {
    /// Build a config from optional values, falling back to the defaults for
    /// anything left unspecified.
    pub fn from_options(page_size: Option<usize>, max_visible_pages: Option<usize>) -> Self {
        PaginatorConfig {
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            max_visible_pages: max_visible_pages.unwrap_or(DEFAULT_MAX_VISIBLE_PAGES),
        }
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }
        if self.max_visible_pages == 0 {
            return Err(PaginationError::InvalidMaxVisiblePages);
        }
        Ok(())
    }
}
