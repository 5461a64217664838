use thiserror::Error;

/// Canonical error type at the Data API boundary.
///
/// Every caller pattern-matches on this instead of probing `response.ok`,
/// `success`, or `code` fields ad hoc.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, refused).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The envelope arrived with `success: false`.
    #[error("{message}")]
    Api { code: i64, message: String },

    /// The response body could not be decoded as an envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The HTTP client itself could not be constructed.
    #[error("client setup error: {0}")]
    Setup(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Builds a status error, falling back to a generic message when the
    /// server did not provide one.
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("server returned status {status}"));
        ApiError::Status { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Setup(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
