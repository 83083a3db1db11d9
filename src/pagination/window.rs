use std::ops::Range;

/// Number of pages needed to show `len` items, `page_size` at a time.
///
/// An empty dataset has zero pages. `page_size` must be non-zero; the
/// paginator validates that at construction.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Index range of the items on 1-indexed `page`, clipped to `len`.
///
/// Pages past the end (or page 0) yield an empty range rather than panicking
/// when used to slice.
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Interior page numbers to show between the first and last anchors.
///
/// Returns an empty vector when every page fits (`total <= max_visible`); the
/// caller then renders `1..=total` directly. Otherwise the window holds up to
/// `max(1, max_visible - 2)` pages, centred on `current` where possible and
/// shifted left when it would run into the last page. Neither `1` nor `total`
/// is ever part of the window.
pub fn visible_page_window(current: usize, total: usize, max_visible: usize) -> Vec<usize> {
    if total <= max_visible {
        return Vec::new();
    }

    let middle_slots = max_visible.saturating_sub(2).max(1);
    let half = middle_slots / 2;

    let mut start = current.saturating_sub(half).max(2);
    let end = start.saturating_add(middle_slots - 1).min(total - 1);

    // Clamped against the last page: pull the start back so the window keeps
    // its full width.
    if start > end || end - start + 1 < middle_slots {
        start = (end + 1).saturating_sub(middle_slots).max(2);
    }

    (start..=end).collect()
}
