//! Reqwest-backed implementation of the [`PageFetcher`] seam.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::client::errors::{ApiError, ApiResult};
use crate::client::{CredentialProvider, PageFetcher, PageResult, SearchQuery};
use crate::domain::article::Article;
use crate::domain::plant::Plant;
use crate::domain::research::ResearchPaper;
use crate::dto::api::ApiEnvelope;

const USER_AGENT: &str = concat!("herbarium/", env!("CARGO_PKG_VERSION"));

/// One paginated REST resource on the Data API.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub path: &'static str,
    pub require_auth: bool,
}

pub const PLANTS: Endpoint = Endpoint {
    path: "plants",
    require_auth: false,
};

pub const ARTICLES: Endpoint = Endpoint {
    path: "articles",
    require_auth: false,
};

// Research papers sit behind the preview gate upstream.
pub const RESEARCH: Endpoint = Endpoint {
    path: "research",
    require_auth: true,
};

/// HTTP client for the remote Data API.
///
/// Credentials are injected rather than read from ambient storage, so the
/// client can be exercised in tests with a fixed token or none at all.
#[derive(Clone)]
pub struct HttpSearchClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpSearchClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Fetches one page of `endpoint`, translating every failure mode into
    /// the canonical [`ApiError`].
    async fn fetch_resource<T>(
        &self,
        endpoint: &Endpoint,
        query: &SearchQuery,
    ) -> ApiResult<PageResult<T>>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}/{}", self.base_url, endpoint.path);
        log::debug!("GET {url} page={}", query.page);

        let mut request = self.http.get(&url).query(&query.query_pairs());
        if endpoint.require_auth {
            if let Some(token) = self.credentials.bearer_token() {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            // A failing status may still carry an envelope with a message.
            let message = response
                .json::<ApiEnvelope<serde_json::Value>>()
                .await
                .ok()
                .map(|envelope| envelope.message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        let envelope: ApiEnvelope<T> = response.json().await.map_err(ApiError::from)?;
        envelope.into_page_result(query.page_size)
    }
}

#[async_trait]
impl PageFetcher<Plant> for HttpSearchClient {
    async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<Plant>> {
        self.fetch_resource(&PLANTS, query).await
    }
}

#[async_trait]
impl PageFetcher<Article> for HttpSearchClient {
    async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<Article>> {
        self.fetch_resource(&ARTICLES, query).await
    }
}

#[async_trait]
impl PageFetcher<ResearchPaper> for HttpSearchClient {
    async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<ResearchPaper>> {
        self.fetch_resource(&RESEARCH, query).await
    }
}
