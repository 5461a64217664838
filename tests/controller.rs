use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use herbarium::client::errors::{ApiError, ApiResult};
use herbarium::client::{Filter, PageFetcher, PageResult, SearchQuery};
use herbarium::domain::types::PageNumber;
use herbarium::search::SearchController;

/// Fetcher that replays a scripted sequence of responses and records every
/// transmitted query.
struct ScriptedFetcher {
    responses: Mutex<VecDeque<ApiResult<PageResult<String>>>>,
    seen: Mutex<Vec<SearchQuery>>,
}

impl ScriptedFetcher {
    fn new(responses: Vec<ApiResult<PageResult<String>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<SearchQuery> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher<String> for ScriptedFetcher {
    async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<String>> {
        self.seen.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(PageResult::default()))
    }
}

fn page(rows: &[&str], total_elements: u64, total_pages: u64) -> ApiResult<PageResult<String>> {
    Ok(PageResult {
        content: rows.iter().map(|s| s.to_string()).collect(),
        total_elements,
        total_pages,
    })
}

#[actix_web::test]
async fn page_change_transmits_zero_based_index() {
    let fetcher = ScriptedFetcher::new(vec![page(&["a"], 30, 3)]);
    let mut controller = SearchController::new(&fetcher, SearchQuery::new());

    controller.handle_page_change(3).await;

    let transmitted = &fetcher.seen()[0];
    assert!(
        transmitted
            .query_pairs()
            .contains(&("pageIndex".to_string(), "2".to_string()))
    );
    // Internal state is zero-based, the displayed number one-based.
    assert_eq!(controller.state().pagination.current_page, 2);
    assert_eq!(controller.state().pagination.display_page(), 3);
}

#[actix_web::test]
async fn keyword_change_defers_the_fetch_until_search() {
    let fetcher = ScriptedFetcher::new(vec![page(&["mint"], 1, 1)]);
    let mut controller =
        SearchController::new(&fetcher, SearchQuery::new().paginate(4, 20));

    controller.handle_keyword_change("mint");
    assert!(fetcher.seen().is_empty());

    controller.handle_search().await;

    let seen = fetcher.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].keyword, "mint");
    assert_eq!(seen[0].page, PageNumber::FIRST);
}

#[actix_web::test]
async fn clearing_a_filter_removes_the_key_and_resets_the_page() {
    let fetcher = ScriptedFetcher::new(vec![page(&[], 0, 0)]);
    let initial = SearchQuery::new()
        .paginate(5, 20)
        .filter("status", Filter::equals("published"));
    let mut controller = SearchController::new(&fetcher, initial);

    controller.handle_filter_change("status", "").await;

    let transmitted = &fetcher.seen()[0];
    assert_eq!(transmitted.page, PageNumber::FIRST);
    assert!(transmitted.filters.is_empty());
    assert!(
        !transmitted
            .query_pairs()
            .iter()
            .any(|(key, _)| key.starts_with("filters["))
    );
}

#[actix_web::test]
async fn page_size_change_resets_to_the_first_page() {
    let fetcher = ScriptedFetcher::new(vec![page(&[], 0, 0)]);
    let mut controller =
        SearchController::new(&fetcher, SearchQuery::new().paginate(4, 20));

    controller.handle_page_size_change(50).await;

    let transmitted = &fetcher.seen()[0];
    assert_eq!(transmitted.page_size, 50);
    assert_eq!(transmitted.page, PageNumber::FIRST);
}

#[actix_web::test]
async fn fetch_failure_becomes_an_error_string_with_empty_rows() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&["a", "b"], 2, 1),
        Err(ApiError::Network("Network down".to_string())),
    ]);
    let mut controller = SearchController::new(&fetcher, SearchQuery::new());

    controller.load().await;
    assert_eq!(controller.state().rows.len(), 2);

    controller.handle_page_change(2).await;

    let state = controller.state();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("network error: Network down"));
    assert!(state.rows.is_empty());
    assert_eq!(state.pagination.total_elements, 0);
}

#[actix_web::test]
async fn server_message_is_surfaced_verbatim() {
    let fetcher = ScriptedFetcher::new(vec![Err(ApiError::Api {
        code: 503,
        message: "maintenance window".to_string(),
    })]);
    let mut controller = SearchController::new(&fetcher, SearchQuery::new());

    controller.handle_search().await;

    assert_eq!(
        controller.state().error.as_deref(),
        Some("maintenance window")
    );
}

#[actix_web::test]
async fn each_success_replaces_the_previous_snapshot_wholesale() {
    let fetcher = ScriptedFetcher::new(vec![page(&["a", "b"], 12, 2), page(&["k"], 12, 2)]);
    let mut controller = SearchController::new(&fetcher, SearchQuery::new());

    controller.load().await;
    controller.handle_page_change(2).await;

    let state = controller.state();
    assert_eq!(state.rows, vec!["k".to_string()]);
    assert_eq!(state.pagination.display_page(), 2);
}

#[actix_web::test]
async fn stale_responses_are_discarded() {
    let fetcher = ScriptedFetcher::new(vec![]);
    let mut controller = SearchController::new(&fetcher, SearchQuery::new());

    let first = controller.begin_request();
    let second = controller.begin_request();

    // The slower first request settles after the second was issued.
    assert!(!controller.apply_response(first, page(&["stale"], 1, 1)));
    assert!(controller.state().is_loading);
    assert!(controller.state().rows.is_empty());

    assert!(controller.apply_response(second, page(&["fresh"], 1, 1)));
    assert!(!controller.state().is_loading);
    assert_eq!(controller.state().rows, vec!["fresh".to_string()]);
}
