use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Version number for repo is blank")]
    BlankVersion,

    #[error("Latest release not found for given repo URL")]
    NotFound,
}
