//! Page slicing and page-window math for listing commands.
//!
//! Two modes are supported, mirroring how the backend is consumed:
//!
//! - **Local mode**: a fully fetched, client-side filtered array is sliced
//!   into fixed-size pages with [`paginate`] and tracked with [`PageState`].
//! - **Display-only mode**: the backend already paginated the data and only
//!   its `total`/`pages` counters are rendered; [`page_window`] is used
//!   directly with the server-supplied page count.
//!
//! All operations clamp instead of failing: an out-of-range page yields an
//! empty slice, navigation past either bound is a no-op, and zero items still
//! count as one (empty) page.

/// Default number of page controls shown before ellipsis compression kicks in.
pub const DEFAULT_PAGE_WINDOW: usize = 5;

/// Returns the requested page slice of `items`, clamped to available data.
///
/// Pages are 1-based. Page zero, a zero page size, or a page past the end all
/// produce an empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// One control in the compressed page-number display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page number.
    Page(usize),
    /// A gap standing in for pages that are not shown.
    Ellipsis,
}

/// Computes the ellipsis-compressed page controls around `current`.
///
/// A window of up to `max_visible` consecutive pages is centered on the
/// current page and shifted back when it would run past the last page. The
/// first and last pages are always reachable; gaps of more than one page are
/// collapsed into an ellipsis marker.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<PageMarker> {
    let total = total.max(1);
    let max_visible = max_visible.max(1);
    let current = current.clamp(1, total);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end + 1 - start < max_visible {
        // Window hit the ceiling; re-expand toward the front.
        start = (end + 1).saturating_sub(max_visible).max(1);
    }

    let mut window = Vec::new();
    if start > 1 {
        window.push(PageMarker::Page(1));
        if start > 2 {
            window.push(PageMarker::Ellipsis);
        }
    }
    for page in start..=end {
        window.push(PageMarker::Page(page));
    }
    if end < total {
        if end < total - 1 {
            window.push(PageMarker::Ellipsis);
        }
        window.push(PageMarker::Page(total));
    }
    window
}

/// Pagination cursor over a known number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Current page, always within `1..=total_pages()`.
    pub current_page: usize,
    /// Items rendered per page, always at least 1.
    pub items_per_page: usize,
    /// Total number of items being paged over.
    pub total_items: usize,
}

impl PageState {
    pub fn new(items_per_page: usize, total_items: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items,
        }
    }

    /// Number of pages, floored at one so an empty listing still has a page.
    pub fn total_pages(&self) -> usize {
        let pages = (self.total_items + self.items_per_page - 1) / self.items_per_page;
        pages.max(1)
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Advances one page; a no-op on the last page.
    pub fn next(&mut self) {
        self.current_page = (self.current_page + 1).min(self.total_pages());
    }

    /// Steps back one page; a no-op on the first page.
    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// The page controls for the current position.
    pub fn window(&self, max_visible: usize) -> Vec<PageMarker> {
        page_window(self.current_page, self.total_pages(), max_visible)
    }
}
