//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    pub assets_dir: String,
    /// Signing key for the flash-message cookie store.
    pub secret: String,
    /// Base URL of the remote Data API, e.g. `https://api.example.org/api`.
    pub api_base_url: String,
    /// Bearer token for endpoints that require authentication.
    pub api_token: Option<String>,
}
