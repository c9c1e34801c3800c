//! Pagination Window
//!
//! Which page buttons a paginated dashboard table shows.

use std::ops::RangeInclusive;

/// Number of page buttons shown by default
pub const DEFAULT_MAX_BUTTONS: u32 = 5;

/// Compute the window of page numbers to show around `page`.
///
/// When every page fits, all pages are shown. Otherwise the window holds
/// `max_buttons` pages centered on `page` where possible and pinned to the
/// first or last page near the ends. Pages are 1-based; an out-of-range
/// `page` still yields a valid window.
pub fn page_range(page: u32, total_pages: u32, max_buttons: u32) -> RangeInclusive<u32> {
    if total_pages == 0 || max_buttons == 0 {
        return empty_range();
    }
    if total_pages <= max_buttons {
        return 1..=total_pages;
    }

    let half = max_buttons / 2;
    let mut start = page.saturating_sub(half).max(1);
    let end = total_pages.min(start.saturating_add(max_buttons - 1));

    if end == total_pages {
        start = (end - max_buttons + 1).max(1);
    }

    start..=end
}

#[allow(clippy::reversed_empty_ranges)]
fn empty_range() -> RangeInclusive<u32> {
    1..=0
}
