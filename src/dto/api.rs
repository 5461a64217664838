//! Wire envelope returned by the Data API for every call.
//!
//! The envelope is converted into a canonical `Result` exactly once, here;
//! callers never inspect `success` or `code` themselves.

use serde::{Deserialize, Serialize};

use crate::client::errors::{ApiError, ApiResult};
use crate::client::PageResult;

/// Query parameters accepted by the `/api/v1/*` list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Optional free-form search string.
    pub q: Option<String>,
    /// Optional page number (1-based).
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Result payload returned by the `/api/v1/*` list endpoints.
#[derive(Debug, Serialize, PartialEq)]
pub struct ListResponse<T> {
    /// Total number of items matching the query.
    pub total: u64,
    pub total_pages: u64,
    /// Page number the items belong to (1-based).
    pub page: usize,
    pub items: Vec<T>,
}

fn default_true() -> bool {
    true
}

/// `{success, code, message, data}` wrapper around every response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// A missing flag counts as success; only an explicit `false` fails.
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<PageData<T>>,
}

/// Paginated slice inside the envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

impl<T> ApiEnvelope<T> {
    /// Converts the envelope into the canonical page result.
    ///
    /// A malformed or empty `data` section decodes as an empty page rather
    /// than an error; `totalPages` falls back to
    /// `ceil(totalElements / pageSize)` when the API omits it.
    pub fn into_page_result(self, page_size: usize) -> ApiResult<PageResult<T>> {
        if !self.success {
            let message = if self.message.trim().is_empty() {
                "request failed".to_string()
            } else {
                self.message
            };
            return Err(ApiError::Api {
                code: self.code,
                message,
            });
        }

        let (content, total_elements, total_pages) = match self.data {
            Some(data) => (data.content, data.total_elements, data.total_pages),
            None => (Vec::new(), 0, None),
        };

        let total_pages =
            total_pages.unwrap_or_else(|| total_elements.div_ceil(page_size.max(1) as u64));

        Ok(PageResult {
            content,
            total_elements,
            total_pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ApiEnvelope;
    use crate::client::errors::ApiError;

    #[test]
    fn missing_data_decodes_as_empty_page() {
        let envelope: ApiEnvelope<i32> =
            serde_json::from_str(r#"{"success": true, "code": 200, "message": "ok"}"#).unwrap();
        let page = envelope.into_page_result(20).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn missing_total_pages_falls_back_to_ceil() {
        let envelope: ApiEnvelope<i32> = serde_json::from_str(
            r#"{"success": true, "data": {"content": [1, 2, 3], "totalElements": 41}}"#,
        )
        .unwrap();
        let page = envelope.into_page_result(20).unwrap();
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn explicit_failure_carries_server_message() {
        let envelope: ApiEnvelope<i32> = serde_json::from_str(
            r#"{"success": false, "code": 503, "message": "maintenance window"}"#,
        )
        .unwrap();
        match envelope.into_page_result(20) {
            Err(ApiError::Api { code, message }) => {
                assert_eq!(code, 503);
                assert_eq!(message, "maintenance window");
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn failure_without_message_uses_default() {
        let envelope: ApiEnvelope<i32> =
            serde_json::from_str(r#"{"success": false, "code": 500, "message": ""}"#).unwrap();
        match envelope.into_page_result(20) {
            Err(ApiError::Api { message, .. }) => assert_eq!(message, "request failed"),
            other => panic!("expected api error, got {other:?}"),
        }
    }
}
