//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while posting an assessment submission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionError {
    #[error("invalid submission endpoint {action:?}: {source}")]
    InvalidEndpoint {
        action: String,
        #[source]
        source: url::ParseError,
    },
    #[error("submission failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while reading service configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmissionConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}
