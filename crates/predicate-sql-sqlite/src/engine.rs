//! SQLite engine implementation.

use std::fmt;
use std::str::FromStr;

use predicate_sql_core::DatabaseEngine;
use thiserror::Error;

/// First release accepting row values.
const ROW_VALUES_SINCE: SqliteVersion = SqliteVersion::new(3, 15, 0);

/// Release that raised the default `SQLITE_MAX_VARIABLE_NUMBER`.
const LARGE_VARIABLE_LIMIT_SINCE: SqliteVersion = SqliteVersion::new(3, 32, 0);

/// Version assumed by [`SqliteEngine::new`].
const DEFAULT_VERSION: SqliteVersion = SqliteVersion::new(3, 45, 0);

/// A SQLite library version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqliteVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl SqliteVersion {
    /// Creates a version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for SqliteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Error parsing a SQLite version string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid SQLite version '{input}': expected MAJOR.MINOR[.PATCH]")]
pub struct SqliteVersionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for SqliteVersion {
    type Err = SqliteVersionError;

    /// Parses `MAJOR.MINOR[.PATCH]`, as returned by `sqlite_version()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SqliteVersionError {
            input: s.to_string(),
        };
        let parts = s
            .trim()
            .split('.')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| err())?;
        match parts.as_slice() {
            [major, minor] => Ok(Self::new(*major, *minor, 0)),
            [major, minor, patch] => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(err()),
        }
    }
}

/// SQLite engine descriptor.
///
/// Capabilities depend on the library version, which the connection layer
/// reads once (`SELECT sqlite_version()`) and passes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqliteEngine {
    version: SqliteVersion,
}

impl SqliteEngine {
    /// Creates a descriptor for a current SQLite release.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version: DEFAULT_VERSION,
        }
    }

    /// Creates a descriptor for a specific SQLite version.
    #[must_use]
    pub const fn with_version(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            version: SqliteVersion::new(major, minor, patch),
        }
    }

    /// Creates a descriptor from a version string such as `"3.14.2"`.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteVersionError`] if the string is not
    /// `MAJOR.MINOR[.PATCH]`.
    pub fn parse_version(version: &str) -> Result<Self, SqliteVersionError> {
        Ok(Self {
            version: version.parse()?,
        })
    }

    /// Returns the SQLite version this descriptor models.
    #[must_use]
    pub const fn version(&self) -> SqliteVersion {
        self.version
    }
}

impl Default for SqliteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DatabaseEngine for SqliteEngine {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn supports_tuple_comparison(&self) -> bool {
        self.version >= ROW_VALUES_SINCE
    }

    fn supports_any_list(&self) -> bool {
        false
    }

    fn max_bound_parameters(&self) -> Option<usize> {
        if self.version >= LARGE_VARIABLE_LIMIT_SINCE {
            Some(32766)
        } else {
            Some(999)
        }
    }
}
