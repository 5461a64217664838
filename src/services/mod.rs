//! Page services: translate query parameters into a search, run it, and
//! shape the result for templates or JSON.

use thiserror::Error;

pub mod api;
pub mod articles;
pub mod plants;
pub mod research;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The Data API reported or caused a failure the caller must surface.
    #[error("{0}")]
    Upstream(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Trims a user-supplied string parameter, dropping blanks.
pub(crate) fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
