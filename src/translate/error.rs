//! Error types for synonym and translation lookups

use thiserror::Error;

/// Errors that can occur while fetching a word's translations
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("{service} request failed: {source}")]
    Request {
        /// Upstream that was being called
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Service returned a non-success status
    #[error("{service} error ({status}): {message}")]
    Api {
        /// Upstream that was being called
        service: &'static str,
        /// HTTP status code (or the status embedded in the body)
        status: u16,
        /// Body or status text
        message: String,
    },

    /// Response parsed but did not contain what we need
    #[error("{service} returned malformed data: {detail}")]
    Malformed {
        /// Upstream that was being called
        service: &'static str,
        /// What was wrong
        detail: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Name of the upstream that failed, if known
    pub fn service(&self) -> Option<&'static str> {
        match self {
            Self::Request { service, .. }
            | Self::Api { service, .. }
            | Self::Malformed { service, .. } => Some(service),
            Self::Json(_) => None,
        }
    }
}
