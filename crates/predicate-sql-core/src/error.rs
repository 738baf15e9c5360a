//! Error types for predicate construction.

use thiserror::Error;

/// Errors raised while rendering a predicate.
///
/// Builders validate their whole input before emitting any text, so an error
/// never comes with partially rendered SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// The input violates a builder precondition (empty cursor, arity
    /// mismatch, empty membership set, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PredicateError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for predicate construction.
pub type Result<T> = std::result::Result<T, PredicateError>;
