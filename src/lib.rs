pub mod app;
pub mod errors;
pub mod input;
pub mod logging;
pub mod pagination;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;
pub mod source;

pub use crate::app::App;
pub use crate::errors::PaginationError;
pub use crate::pagination::{
    compute_view_model, strip_text, total_pages, visible_page_window, Control, NavKind,
    Navigation, Paginator, PaginatorBuilder, PaginatorConfig, Surface, ViewModel,
};
