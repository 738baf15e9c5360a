//! Error types for the command-line front end.

use predicate_sql_core::PredicateError;
use predicate_sql_sqlite::SqliteVersionError;

/// Errors that can occur while turning arguments into predicates.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The builder rejected its input.
    #[error(transparent)]
    Predicate(#[from] PredicateError),

    /// `--sqlite-version` could not be parsed.
    #[error(transparent)]
    SqliteVersion(#[from] SqliteVersionError),

    /// A `--key` argument is not `column=value`.
    #[error("Invalid cursor key '{0}': expected COLUMN=VALUE")]
    InvalidKey(String),

    /// A value parsed as JSON but is not a scalar.
    #[error("Unsupported value '{0}': only scalars (numbers, strings, booleans, null) can be bound")]
    UnsupportedValue(String),

    /// A `--row` argument could not be read as a list of values.
    #[error("Invalid row '{0}': expected comma-separated values or a JSON array")]
    InvalidRow(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
