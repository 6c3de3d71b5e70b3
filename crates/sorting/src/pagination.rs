//! Page-number pagination over an already ordered slice.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;

/// Requested page. Values below 1 are accepted and normalized by [`paginate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationOptions {
    pub page: i64,
    pub page_size: i64,
}

impl PaginationOptions {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE as i64,
        }
    }
}

/// One page of an ordered sequence plus navigation metadata.
///
/// `page` and `page_size` are the normalized values actually served, so both
/// are always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Cut one page out of `items`. Never fails.
///
/// Normalization, in order:
/// 1. `page < 1` becomes 1.
/// 2. `page_size < 1` becomes [`DEFAULT_PAGE_SIZE`].
/// 3. `total_pages = ceil(total_items / page_size)`.
/// 4. A page beyond the last one is clamped to the last one (when there is one).
/// 5. A start index at or past the end yields an empty page.
pub fn paginate<T: Clone>(items: &[T], options: PaginationOptions) -> PaginatedResult<T> {
    let total_items = items.len();

    let mut page = if options.page < 1 {
        1
    } else {
        usize::try_from(options.page).unwrap_or(usize::MAX)
    };

    let page_size = if options.page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        usize::try_from(options.page_size).unwrap_or(usize::MAX)
    };

    let total_pages = total_items.div_ceil(page_size);

    if page > total_pages && total_pages > 0 {
        page = total_pages;
    }

    // Saturating: with no items the page is never clamped and may be huge.
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(total_items);

    let page_items = if start < total_items {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    PaginatedResult {
        items: page_items,
        page,
        page_size,
        total_items,
        total_pages,
        has_next: page < total_pages,
        has_prev: page > 1,
    }
}
