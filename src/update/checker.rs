//! Connectivity probe, release fetch, and version comparison

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::update::endpoint::release_endpoint;
use crate::update::error::UpdateError;

/// Response from the GitHub latest-release API. Only the tag is read; a
/// repository without any release answers without a usable `tag_name`.
#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    tag_name: Option<String>,
}

/// Outcome of a completed update check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the remote tag differs from the local version
    pub update_available: bool,
    /// The remote release tag, empty when the endpoint was unreachable
    pub remote_version: String,
}

impl CheckOutcome {
    fn unreachable() -> Self {
        Self {
            update_available: false,
            remote_version: String::new(),
        }
    }
}

/// Checks a GitHub repository's latest release against a local version
pub struct UpdateChecker {
    client: reqwest::Client,
    api_base_url: String,
}

impl UpdateChecker {
    /// Creates a new UpdateChecker from a configuration
    pub fn new(config: &CheckerConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-check")
                .timeout(config.timeout())
                .build()
                .expect("Failed to create HTTP client"),
            api_base_url: config.api_base_url.clone(),
        }
    }

    /// Checks whether a newer release than `local_version` is published.
    ///
    /// An unreachable endpoint is not an error: the check reports "no update"
    /// with an empty remote version so a disconnected machine stays quiet.
    /// Versions are compared by plain string inequality, so `v1.0.0` and
    /// `1.0.0` count as different versions.
    pub async fn check(
        &self,
        local_version: &str,
        repo_url: &str,
    ) -> Result<CheckOutcome, UpdateError> {
        let url = release_endpoint(repo_url, &self.api_base_url);

        if !self.probe(&url).await {
            return Ok(CheckOutcome::unreachable());
        }

        let remote_version = self.fetch_version(&url).await?;

        Ok(CheckOutcome {
            update_available: local_version != remote_version,
            remote_version,
        })
    }

    /// Returns whether a request to the endpoint succeeds with status 200.
    /// Redirects and error statuses count as no connection; the body is
    /// discarded unread.
    async fn probe(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                debug!("Connectivity probe failed for {}: {}", url, e);
                false
            }
        }
    }

    /// Fetches the latest release and extracts its tag
    async fn fetch_version(&self, url: &str) -> Result<String, UpdateError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let body = response.bytes().await?;
        let release: Release = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to parse latest release response: {}", e);
            UpdateError::Decode(e)
        })?;

        match release.tag_name {
            None => Err(UpdateError::NotFound),
            Some(tag) if tag.is_empty() => Err(UpdateError::BlankVersion),
            Some(tag) => Ok(tag),
        }
    }
}

impl Default for UpdateChecker {
    fn default() -> Self {
        Self::new(&CheckerConfig::default())
    }
}
