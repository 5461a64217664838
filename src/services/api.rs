use serde::Serialize;

use crate::client::{PageFetcher, SearchQuery};
use crate::dto::api::{ListQuery, ListResponse};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::SearchController;
use crate::services::{normalized, ServiceError, ServiceResult};

/// Runs a list query for one of the `/api/v1/*` endpoints and returns the
/// page as JSON-ready data.
///
/// Unlike the HTML pages, a fetch failure here is an error for the caller:
/// the route answers 502 with the upstream message.
pub async fn list_resource<T, F>(fetcher: &F, params: ListQuery) -> ServiceResult<ListResponse<T>>
where
    T: Serialize + Clone,
    F: PageFetcher<T> + ?Sized,
{
    let mut query =
        SearchQuery::new().paginate(1, params.per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE));
    if let Some(term) = normalized(params.q) {
        query = query.keyword(term);
    }

    let mut controller = SearchController::new(fetcher, query);
    match params.page {
        Some(page) => controller.handle_page_change(page).await,
        None => controller.handle_search().await,
    }

    let state = controller.state();
    if let Some(message) = &state.error {
        return Err(ServiceError::Upstream(message.clone()));
    }

    Ok(ListResponse {
        total: state.pagination.total_elements,
        total_pages: state.pagination.total_pages as u64,
        page: state.pagination.display_page(),
        items: state.rows.clone(),
    })
}
