//! Mock fetcher implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::client::errors::ApiResult;
use crate::client::{PageFetcher, PageResult, SearchQuery};

mock! {
    pub Fetcher<T: Send + Sync + 'static> {}

    #[async_trait]
    impl<T: Send + Sync + 'static> PageFetcher<T> for Fetcher<T> {
        async fn fetch_page(&self, query: &SearchQuery) -> ApiResult<PageResult<T>>;
    }
}
