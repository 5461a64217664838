//! Search state controller: owns the query, performs the fetch, exposes the
//! derived view state.
//!
//! One controller instance drives one list page. Every user action mutates
//! the query, issues at most one fetch, and replaces the state snapshot
//! wholesale. Responses are tagged with a monotonically increasing request
//! id so a slow, stale response can never overwrite fresher state.

use crate::client::errors::ApiResult;
use crate::client::{Filter, PageFetcher, PageResult, SearchQuery};
use crate::domain::types::PageNumber;
use crate::pagination::PaginationView;

/// View state derived from the latest settled fetch.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    pub rows: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub pagination: PaginationView,
}

impl<T> SearchState<T> {
    fn initial(query: &SearchQuery) -> Self {
        Self {
            rows: Vec::new(),
            is_loading: false,
            error: None,
            pagination: PaginationView::empty(query),
        }
    }
}

pub struct SearchController<'a, T, F: ?Sized> {
    fetcher: &'a F,
    query: SearchQuery,
    state: SearchState<T>,
    last_request: u64,
}

impl<'a, T, F> SearchController<'a, T, F>
where
    F: PageFetcher<T> + ?Sized,
{
    pub fn new(fetcher: &'a F, query: SearchQuery) -> Self {
        let state = SearchState::initial(&query);
        Self {
            fetcher,
            query,
            state,
            last_request: 0,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn state(&self) -> &SearchState<T> {
        &self.state
    }

    /// Fetches with the query as-is. Used for the initial load, where the
    /// page requested in the URL must survive.
    pub async fn load(&mut self) {
        let request_id = self.begin_request();
        let query = self.query.clone();
        let result = self.fetcher.fetch_page(&query).await;
        self.apply_response(request_id, result);
    }

    /// Updates the keyword without fetching; the fetch is deferred until
    /// [`SearchController::handle_search`].
    pub fn handle_keyword_change(&mut self, keyword: impl Into<String>) {
        self.query.keyword = keyword.into();
    }

    /// Runs the search with the current keyword and filters from page one.
    pub async fn handle_search(&mut self) {
        self.query.first_page();
        self.load().await;
    }

    /// Sets or clears a single string filter. An empty value removes the
    /// key. Resets to the first page.
    pub async fn handle_filter_change(&mut self, key: &str, value: &str) {
        self.handle_filter_update(key, Filter::equals(value)).await;
    }

    /// Typed variant of [`SearchController::handle_filter_change`] for
    /// non-equality filters.
    pub async fn handle_filter_update(&mut self, key: &str, filter: Filter) {
        self.query.set_filter(key, filter);
        self.query.first_page();
        self.load().await;
    }

    /// Moves to `page` (1-based); keyword and filters are untouched.
    pub async fn handle_page_change(&mut self, page: usize) {
        self.query.page = PageNumber::new(page);
        self.load().await;
    }

    /// Changes the page size and resets to the first page.
    pub async fn handle_page_size_change(&mut self, size: usize) {
        self.query.page_size = size.max(1);
        self.query.first_page();
        self.load().await;
    }

    /// Marks the state as loading and returns the id the next response must
    /// present to be applied.
    ///
    /// `begin_request`/`apply_response` are public so callers that drive
    /// fetches themselves (spawned tasks, scripted tests) get the same
    /// staleness guarantee as [`SearchController::load`].
    pub fn begin_request(&mut self) -> u64 {
        self.last_request += 1;
        self.state.is_loading = true;
        self.state.error = None;
        self.last_request
    }

    /// Applies a settled fetch, unless a newer request was issued in the
    /// meantime. Returns whether the response was applied.
    pub fn apply_response(&mut self, request_id: u64, result: ApiResult<PageResult<T>>) -> bool {
        if request_id != self.last_request {
            log::debug!(
                "discarding stale response {request_id} (latest is {})",
                self.last_request
            );
            return false;
        }

        self.state.is_loading = false;
        match result {
            Ok(page) => {
                self.state.pagination = PaginationView::of(&self.query, &page);
                self.state.rows = page.content;
                self.state.error = None;
            }
            Err(err) => {
                log::error!("Failed to fetch page {}: {err}", self.query.page);
                self.state.error = Some(err.to_string());
                self.state.rows = Vec::new();
                self.state.pagination = PaginationView::empty(&self.query);
            }
        }
        true
    }
}
