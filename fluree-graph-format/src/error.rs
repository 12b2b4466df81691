//! Error types for sorted serialization

/// Error type for formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A structural invariant established by the analyzer did not hold
    /// while rendering. Nothing is written when this is returned.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The output sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The string collator could not be constructed
    #[error("Collation error: {0}")]
    Collation(String),
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;

impl FormatError {
    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
