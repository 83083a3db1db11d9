use thiserror::Error;

/// Errors produced by the pagination core.
///
/// Out-of-range navigation through `Paginator::go_to_page` is not an error;
/// it is absorbed silently. `PageOutOfRange` is only returned by the strict
/// `Paginator::try_go_to_page` variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A page size of zero was supplied at construction.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// A maximum visible page count of zero was supplied at construction.
    #[error("max visible pages must be at least 1")]
    InvalidMaxVisiblePages,

    /// Navigation target outside `1..=total_pages`.
    #[error("page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: usize, total_pages: usize },
}
