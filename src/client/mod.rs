//! Trait seam and query types for the remote Data API.
//!
//! The application never talks to a database; every list page is one `GET`
//! against a paginated REST resource. [`SearchQuery`] captures the full
//! request state, [`PageFetcher`] is the capability the search controller
//! fetches through, and [`http::HttpSearchClient`] is the reqwest-backed
//! implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::client::errors::ApiResult;
use crate::domain::types::PageNumber;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// A single filter entry. Absence of a key means "no filter"; inserting
/// [`Filter::NoFilter`] removes the key, so an empty value is never
/// transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    NoFilter,
    Equals(String),
    Range { min: i64, max: i64 },
}

impl Filter {
    /// Builds an equality filter, mapping a blank value to [`Filter::NoFilter`].
    pub fn equals(value: impl Into<String>) -> Self {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            Filter::NoFilter
        } else {
            Filter::Equals(value)
        }
    }

    /// Wire representation of the filter value, `None` when nothing should
    /// be transmitted.
    pub fn as_param(&self) -> Option<String> {
        match self {
            Filter::NoFilter => None,
            Filter::Equals(value) => Some(value.clone()),
            Filter::Range { min, max } => Some(format!("{min}..{max}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub field: String,
    pub direction: SortDirection,
}

impl SortBy {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Immutable snapshot of one list request: keyword, filters, sort, paging.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub page: PageNumber,
    pub page_size: usize,
    pub keyword: String,
    pub filters: BTreeMap<String, Filter>,
    pub sort: Option<SortBy>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: PageNumber::FIRST,
            page_size: crate::pagination::DEFAULT_ITEMS_PER_PAGE,
            keyword: String::new(),
            filters: BTreeMap::new(),
            sort: None,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn filter(mut self, key: impl Into<String>, filter: Filter) -> Self {
        self.set_filter(key, filter);
        self
    }

    pub fn sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = PageNumber::new(page);
        self.page_size = per_page.max(1);
        self
    }

    /// Sets or clears a single filter entry. [`Filter::NoFilter`] removes the
    /// key entirely so the wire query never carries an empty value.
    pub fn set_filter(&mut self, key: impl Into<String>, filter: Filter) {
        let key = key.into();
        match filter {
            Filter::NoFilter => {
                self.filters.remove(&key);
            }
            other => {
                self.filters.insert(key, other);
            }
        }
    }

    /// Resets the query to the first page, keeping keyword/filters/sort.
    pub fn first_page(&mut self) {
        self.page = PageNumber::FIRST;
    }

    /// Builds the wire query pairs: `pageIndex` (zero-based), `pageSize`,
    /// then only the non-empty fields. A removed filter contributes nothing,
    /// never `key=`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("pageIndex".to_string(), self.page.zero_based().to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];

        let keyword = self.keyword.trim();
        if !keyword.is_empty() {
            pairs.push(("keyword".to_string(), keyword.to_string()));
        }

        for (key, filter) in &self.filters {
            if let Some(value) = filter.as_param() {
                pairs.push((format!("filters[{key}]"), value));
            }
        }

        if let Some(sort) = &self.sort {
            pairs.push(("sortField".to_string(), sort.field.clone()));
            pairs.push((
                "sortDirection".to_string(),
                sort.direction.as_str().to_string(),
            ));
        }

        pairs
    }
}

/// One page of a remote resource. Replaces the previous snapshot wholesale;
/// nothing is merged incrementally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Capability to fetch one page of `T` for a query.
#[async_trait]
pub trait PageFetcher<T> {
    async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<T>>;
}

/// Supplies the bearer token for endpoints that require authentication.
///
/// Injected into the HTTP client so the search layer stays testable without
/// any ambient token storage.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Credential provider backed by a value fixed at startup (typically from
/// configuration).
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.filter(|t| !t.trim().is_empty()))
    }
}

impl CredentialProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, SearchQuery, SortBy};

    fn pair_names(query: &SearchQuery) -> Vec<String> {
        query.query_pairs().into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn query_pairs_transmit_zero_based_page() {
        let query = SearchQuery::new().paginate(3, 10);
        let pairs = query.query_pairs();
        assert_eq!(pairs[0], ("pageIndex".to_string(), "2".to_string()));
        assert_eq!(pairs[1], ("pageSize".to_string(), "10".to_string()));
    }

    #[test]
    fn blank_keyword_is_omitted() {
        let query = SearchQuery::new().keyword("   ");
        assert!(!pair_names(&query).contains(&"keyword".to_string()));
    }

    #[test]
    fn cleared_filter_is_not_transmitted() {
        let mut query = SearchQuery::new().filter("status", Filter::equals("active"));
        query.set_filter("status", Filter::equals(""));
        assert!(query.filters.is_empty());
        assert!(
            !query
                .query_pairs()
                .iter()
                .any(|(k, _)| k == "filters[status]")
        );
    }

    #[test]
    fn filters_and_sort_use_wire_names() {
        let query = SearchQuery::new()
            .filter("family", Filter::equals("Lamiaceae"))
            .filter("year", Filter::Range { min: 2010, max: 2020 })
            .sort(SortBy::desc("name"));
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("filters[family]".to_string(), "Lamiaceae".to_string())));
        assert!(pairs.contains(&("filters[year]".to_string(), "2010..2020".to_string())));
        assert!(pairs.contains(&("sortField".to_string(), "name".to_string())));
        assert!(pairs.contains(&("sortDirection".to_string(), "desc".to_string())));
    }
}
