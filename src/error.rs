//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for application plumbing (config, CLI).
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a corpus cannot be turned into an [`Index`](crate::Index).
#[derive(Debug, Error)]
pub enum IndexError {
    /// A record violates the non-empty field invariant.
    #[error("record #{position} has an empty `{field}` field")]
    EmptyField { position: usize, field: &'static str },

    /// The corpus document could not be decoded.
    #[error("failed to parse corpus: {0}")]
    Parse(String),

    /// The corpus file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by an analytics sink. Never surfaces to search callers.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("analytics sink I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode search event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("analytics sink unavailable: {0}")]
    Unavailable(String),
}
