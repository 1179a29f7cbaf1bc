//! Store error types.

/// Errors that can occur against a cache store backend.
///
/// Callers in the cache layer treat every variant the same way: a read
/// failure degrades to a miss, a write failure is logged and dropped. The
/// variants exist for operator logging, not for control flow.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to reach the backend.
    #[error("store connection error: {message}")]
    Connection { message: String },

    /// The backend accepted the request but failed executing it.
    #[error("store backend error: {message}")]
    Backend { message: String },

    /// The requested pattern could not be compiled for matching.
    #[error("invalid key pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl StoreError {
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
