//! Pagination core: page math, the view model and the page-change state
//! machine. Nothing in here knows how items or controls are drawn; rendering
//! goes through the [`Surface`] trait.

pub mod config;
pub mod paginator;
pub mod surface;
pub mod view_model;
pub mod window;

pub use config::{PaginatorConfig, DEFAULT_MAX_VISIBLE_PAGES, DEFAULT_PAGE_SIZE};
pub use paginator::{Navigation, Paginator, PaginatorBuilder};
pub use surface::Surface;
pub use view_model::{
    compute_view_model, page_caption, strip_text, Control, NavKind, PageState, ViewModel,
};
pub use window::{page_range, total_pages, visible_page_window};
