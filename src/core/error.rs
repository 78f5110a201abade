//! Error types for rate fetching

use reqwest::StatusCode;

/// A required configuration value that was absent or blank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

/// Failures surfaced by an [`ExchangeRateProvider`](super::ExchangeRateProvider).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Request error: {source} for URL: {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body of a failed response is never read.
    #[error("HTTP error: {status} for URL: {url}")]
    HttpStatus { status: StatusCode, url: String },

    #[error("Failed to parse rates response: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
