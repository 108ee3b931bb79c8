//! Shared error types for the services crate.

use thiserror::Error;

use flash_core::model::QuickCardError;

/// Errors emitted while reading `ApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url must use http or https, got {scheme:?}")]
    UnsupportedScheme { scheme: String },
    #[error("invalid timeout {raw:?}")]
    InvalidTimeout { raw: String },
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Transport-level failures talking to the flashcard backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors emitted while loading a quiz batch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizLoadError {
    /// The server answered but refused to build a quiz.
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuickAddService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuickAddError {
    #[error(transparent)]
    Draft(#[from] QuickCardError),
    #[error("server did not accept the card")]
    Rejected,
    #[error(transparent)]
    Api(#[from] ApiError),
}
