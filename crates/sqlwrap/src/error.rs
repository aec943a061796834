//! Error types for sqlwrap

use thiserror::Error;

/// Result type alias for statement builds
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors a statement build can fail with.
///
/// Every variant describes a caller-side contract violation; nothing is
/// retried and no partial statement is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Payload is not a single record or row
    #[error("Invalid upsert payload: {0}")]
    InvalidUpsertPayload(String),

    /// Payload is not a collection of records or rows
    #[error("Invalid batch payload: {0}")]
    InvalidBatchPayload(String),

    /// Batch collection has no elements
    #[error("Empty batch payload")]
    EmptyBatchPayload,

    /// IN-expansion or placeholder rewriting rejected the statement
    #[error("Rebind error: {0}")]
    RebindFailure(String),

    /// Dialect name could not be resolved
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

impl BuildError {
    /// Create an invalid upsert payload error
    pub fn invalid_upsert(message: impl Into<String>) -> Self {
        Self::InvalidUpsertPayload(message.into())
    }

    /// Create an invalid batch payload error
    pub fn invalid_batch(message: impl Into<String>) -> Self {
        Self::InvalidBatchPayload(message.into())
    }

    /// Create a rebind error
    pub fn rebind(message: impl Into<String>) -> Self {
        Self::RebindFailure(message.into())
    }

    /// Check if this is an invalid upsert payload error
    pub fn is_invalid_upsert(&self) -> bool {
        matches!(self, Self::InvalidUpsertPayload(_))
    }

    /// Check if this is an invalid batch payload error
    pub fn is_invalid_batch(&self) -> bool {
        matches!(self, Self::InvalidBatchPayload(_))
    }

    /// Check if this is an empty batch error
    pub fn is_empty_batch(&self) -> bool {
        matches!(self, Self::EmptyBatchPayload)
    }

    /// Check if this is a rebind error
    pub fn is_rebind(&self) -> bool {
        matches!(self, Self::RebindFailure(_))
    }
}
