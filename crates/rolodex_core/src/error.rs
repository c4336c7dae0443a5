use reqwest::StatusCode;
use thiserror::Error;

/// Everything a feed fetch can fail with. Errors stop at the selection
/// controller and reach the diagnostics log only, never the rendering layer.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed configuration missing: {name} is not set")]
    ConfigurationMissing { name: &'static str },
    #[error("network failure while querying the feed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed responded with status {status}")]
    HttpStatus { status: StatusCode },
    #[error("feed response shape is invalid: {detail}")]
    InvalidResponseShape { detail: String },
}

impl FeedError {
    pub(crate) fn shape(detail: impl Into<String>) -> Self {
        Self::InvalidResponseShape {
            detail: detail.into(),
        }
    }
}
