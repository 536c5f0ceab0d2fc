//! Error types for quill

use thiserror::Error;

/// Result alias using the quill [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the submission and draft workflows
#[derive(Debug, Error)]
pub enum Error {
    /// A caller passed a submission with a required field missing.
    ///
    /// This is a contract violation by the caller, raised before any side
    /// effect, and is never shown as a retryable user error.
    #[error("developer error: missing required field `{0}`")]
    MissingField(&'static str),

    /// Permlink resolution failed before anything was broadcast
    #[error("permlink resolution failed: {0}")]
    PermlinkResolution(String),

    /// The broadcast service rejected or failed to relay the operation pair
    #[error("broadcast failed: {0}")]
    Broadcast(String),

    /// Draft storage error
    #[error("draft store error: {0}")]
    DraftStore(String),

    /// A draft id was not found in the store
    #[error("draft not found: {0}")]
    DraftNotFound(String),

    /// Contribution API error
    #[error("contribution API error: {0}")]
    ContributionApi(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid command-line argument combination
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}
