//! Error types for the search engine and analytics collaborators.

/// Errors surfaced by the search engine collaborator.
///
/// The cache layer never retries or maps these: a fetch failure propagates
/// unchanged to whoever invoked the cached operation.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The engine could not be reached or refused the connection.
    #[error("search engine unavailable: {message}")]
    Unavailable { message: String },

    /// The engine rejected the query itself.
    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    /// The engine accepted the query but failed executing it.
    #[error("search engine error: {message}")]
    Engine { message: String },
}

impl SearchError {
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    /// Returns `true` for infrastructure failures (as opposed to bad input).
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Errors surfaced by the popularity analytics collaborator.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The analytics store could not be reached.
    #[error("analytics store unavailable: {message}")]
    Unavailable { message: String },

    /// The analytics store failed to execute the popularity query.
    #[error("analytics query failed: {message}")]
    Query { message: String },
}

impl AnalyticsError {
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
