//! Windowed page-number rendering for list pages.
//!
//! The token sequence is a `Vec<Option<usize>>` where `None` marks an
//! ellipsis slot between skipped page ranges.

use serde::Serialize;

use crate::client::{PageResult, SearchQuery};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const DEFAULT_SIBLINGS: usize = 1;

/// Computes the token window around `current_page` (1-based).
///
/// With `total_page_numbers = 2 * siblings + 5` slots available (first, last,
/// current, its siblings, and two ellipses), small page counts render in
/// full; otherwise one of three dot layouts applies, with edge runs of
/// `2 + 2 * siblings` numbers.
fn windowed_pages(current_page: usize, total_pages: usize, siblings: usize) -> Vec<Option<usize>> {
    let total_page_numbers = 2 * siblings + 5;

    if total_page_numbers >= total_pages {
        return (1..=total_pages).map(Some).collect();
    }

    let left_sibling = current_page.saturating_sub(siblings).max(1);
    let right_sibling = (current_page + siblings).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 2;

    let edge_count = 2 + 2 * siblings;

    if !show_left_dots && show_right_dots {
        let mut pages: Vec<Option<usize>> = (1..=edge_count).map(Some).collect();
        pages.push(None);
        pages.push(Some(total_pages));
        pages
    } else if show_left_dots && !show_right_dots {
        let mut pages = vec![Some(1), None];
        pages.extend((total_pages - edge_count + 1..=total_pages).map(Some));
        pages
    } else {
        let mut pages = vec![Some(1), None];
        pages.extend((left_sibling..=right_sibling).map(Some));
        pages.push(None);
        pages.push(Some(total_pages));
        pages
    }
}

/// Paging state derived from the latest page result and query.
///
/// `current_page` is zero-based internally; [`PaginationView::display_page`]
/// maps it back to the one-based number shown in the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_elements: u64,
    pub page_size: usize,
}

impl PaginationView {
    pub fn of<T>(query: &SearchQuery, result: &PageResult<T>) -> Self {
        Self {
            current_page: query.page.zero_based(),
            total_pages: result.total_pages as usize,
            total_elements: result.total_elements,
            page_size: query.page_size,
        }
    }

    /// View for a query with no data (initial state or after a failure).
    pub fn empty(query: &SearchQuery) -> Self {
        Self {
            current_page: query.page.zero_based(),
            total_pages: 0,
            total_elements: 0,
            page_size: query.page_size,
        }
    }

    pub const fn display_page(&self) -> usize {
        self.current_page + 1
    }
}

impl Default for PaginationView {
    fn default() -> Self {
        Self {
            current_page: 0,
            total_pages: 0,
            total_elements: 0,
            page_size: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Serialized pagination strip handed to templates.
///
/// `pages` is empty when there is at most one page, in which case the
/// control renders nothing. `prev`/`next` carry the target page and are
/// `None` exactly at the corresponding boundary. The control does not clamp
/// `page` into range; callers are responsible for sane input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageControls {
    pub pages: Vec<Option<usize>>,
    /// Current page, 1-based for display.
    pub page: usize,
    pub total_pages: usize,
    pub total_elements: u64,
    pub page_size: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageControls {
    pub fn new(view: &PaginationView) -> Self {
        Self::with_siblings(view, DEFAULT_SIBLINGS)
    }

    pub fn with_siblings(view: &PaginationView, siblings: usize) -> Self {
        let page = view.display_page();
        let pages = if view.total_pages <= 1 {
            Vec::new()
        } else {
            windowed_pages(page, view.total_pages, siblings)
        };

        Self {
            pages,
            page,
            total_pages: view.total_pages,
            total_elements: view.total_elements,
            page_size: view.page_size,
            prev: (page > 1).then(|| page - 1),
            next: (page < view.total_pages).then(|| page + 1),
        }
    }

    /// Whether the strip has anything to render.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Target for a click on a page token; the active page yields `None`.
    pub fn page_target(&self, page: usize) -> Option<usize> {
        (page != self.page).then_some(page)
    }
}
