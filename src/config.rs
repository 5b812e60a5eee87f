use serde::Deserialize;
use std::time::Duration;

/// Default base URL for the GitHub API
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default timeout for HTTP requests in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Base URL of the releases API
    pub api_base_url: String,
    /// HTTP request timeout in milliseconds
    pub request_timeout: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl CheckerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout)
    }
}
