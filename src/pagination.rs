//! Pagination calculator for list views.
//!
//! DESIGN
//! ======
//! `calculate_pagination` is a pure function: it takes the full item
//! collection plus a requested page and returns the slice for that page
//! with its metadata. Out-of-range requests are clamped, never rejected, so
//! a stale `?page=` link degrades to the nearest valid page.

use std::fmt;

use serde::Serialize;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Smallest page size the HTTP layer accepts.
pub const MIN_PAGE_SIZE: usize = 10;

/// Largest page size the HTTP layer accepts.
pub const MAX_PAGE_SIZE: usize = 20;

// =============================================================================
// TYPES
// =============================================================================

/// Metadata describing one resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Resolved page, 1-indexed. Never the raw request.
    pub current_page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Items for one page plus the metadata that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
}

// =============================================================================
// CALCULATION
// =============================================================================

/// Slice `items` down to the requested page.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]`. A zero
/// `page_size` is treated as `1`.
#[must_use]
pub fn calculate_pagination<T: Clone>(items: &[T], requested_page: i64, page_size: usize) -> PaginatedResponse<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let last_page = i64::try_from(total_pages.max(1)).unwrap_or(i64::MAX);
    let current_page = usize::try_from(requested_page.clamp(1, last_page)).unwrap_or(1);

    let start = (current_page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    PaginatedResponse {
        items: items[start..end].to_vec(),
        pagination: PaginationState { current_page, page_size, total_items, total_pages },
    }
}

/// Clamp a caller-supplied page size into `[MIN_PAGE_SIZE, MAX_PAGE_SIZE]`.
#[must_use]
pub fn clamp_page_size(page_size: usize) -> usize {
    page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

// =============================================================================
// NAVIGATION
// =============================================================================

impl PaginationState {
    /// Page before this one, if any.
    #[must_use]
    pub fn previous_page(&self) -> Option<usize> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Page after this one, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<usize> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }

    /// Navigation controls are hidden when everything fits on one page.
    #[must_use]
    pub fn is_single_page(&self) -> bool {
        self.total_pages <= 1
    }
}

/// An empty collection still reads as one page.
impl fmt::Display for PaginationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
