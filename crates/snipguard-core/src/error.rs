//! Error types for SnipGuard Core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A custom pattern failed to compile or trial-match at registration.
    /// The registry is left unchanged when this is returned.
    #[error("Invalid pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    /// A custom pattern name collides with a built-in category.
    #[error("Pattern name '{0}' shadows a built-in category")]
    ReservedPatternName(String),

    /// A matcher failed while scanning. Non-fatal: the scan skips the
    /// offending pattern and continues, surfacing this as a diagnostic.
    #[error("Matcher '{name}' failed during scan: {reason}")]
    MatcherFailed { name: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
