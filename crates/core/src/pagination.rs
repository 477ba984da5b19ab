//! Pagination state machine and the page-button window.
//!
//! `page_index` is server-authoritative: a requested page stays provisional
//! until a response confirms it through [`PaginationController::commit`].

use std::ops::RangeInclusive;

/// Number of page buttons shown at once.
pub const DEFAULT_WINDOW: u32 = 7;

/// Committed pagination state. `page_index` is 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: u32,
    pub total_pages: u32,
}

/// Where a page-change intent points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Previous,
    Next,
    /// Explicit 0-based page.
    Index(u32),
}

/// Derived view for rendering page controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// 1-based page numbers to show.
    pub window: RangeInclusive<u32>,
    /// 1-based current page.
    pub current: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationController {
    state: PaginationState,
}

impl PaginationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Turn a relative target into an absolute 0-based page.
    ///
    /// `Previous` on page 0 has nowhere to go and yields `None`.
    pub fn resolve(&self, target: PageTarget) -> Option<u32> {
        match target {
            PageTarget::Previous => self.state.page_index.checked_sub(1),
            PageTarget::Next => self.state.page_index.checked_add(1),
            PageTarget::Index(index) => Some(index),
        }
    }

    /// Decide whether moving to `target` warrants a new search.
    ///
    /// Returns the page to request, or `None` when the target equals the
    /// current page or lies outside `[0, total_pages)`. State is not touched.
    pub fn request_page(&self, target: u32) -> Option<u32> {
        if target == self.state.page_index || target >= self.state.total_pages {
            return None;
        }
        Some(target)
    }

    /// Apply pagination fields from a confirmed response.
    ///
    /// Absent fields leave the existing values in place.
    pub fn commit(&mut self, total_pages: Option<u32>, current_page: Option<u32>) {
        if let Some(total) = total_pages {
            self.state.total_pages = total;
        }
        if let Some(current) = current_page {
            self.state.page_index = current;
        }

        let total = self.state.total_pages;
        if total > 0 && self.state.page_index >= total {
            tracing::warn!(page_index = self.state.page_index, total_pages = total, "server page out of range; clamping");
            self.state.page_index = total - 1;
        }
    }

    /// Page controls for the committed state, or `None` when there is at
    /// most one page.
    pub fn controls(&self) -> Option<PageControls> {
        let total = self.state.total_pages;
        if total <= 1 {
            return None;
        }

        let current = self.state.page_index + 1;
        Some(PageControls {
            window: page_window(current, total, DEFAULT_WINDOW),
            current,
            has_previous: current > 1,
            has_next: current < total,
        })
    }
}

/// Contiguous window of 1-based page numbers centred on `current`.
///
/// The window is clamped to `[1, total_pages]` and is exactly `window_size`
/// wide unless there are fewer pages than that. Empty when `total_pages` or
/// `window_size` is 0.
#[allow(clippy::reversed_empty_ranges)]
pub fn page_window(current: u32, total_pages: u32, window_size: u32) -> RangeInclusive<u32> {
    if total_pages == 0 || window_size == 0 {
        return 1..=0;
    }

    let mut start = current.saturating_sub(window_size / 2).max(1);
    let end = total_pages.min(start.saturating_add(window_size - 1));

    if end - start + 1 < window_size {
        start = end.saturating_sub(window_size - 1).max(1);
    }

    start..=end
}
