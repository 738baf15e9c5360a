//! # predicate-sql-sqlite
//!
//! SQLite engine descriptor for `predicate-sql-core`.
//!
//! # What SQLite supports
//!
//! - **[Row values]**: `(a, b) > (?, ?)` and `(a, b) IN (VALUES ...)` are
//!   accepted since SQLite 3.15.0. Older versions get the emulated
//!   `AND`/`OR` renderings.
//! - **No array binding**: SQLite cannot bind a list to a single parameter,
//!   so `= ANY(?)` is never rendered; IN-lists get one placeholder per value.
//! - **[Parameter cap]**: `SQLITE_MAX_VARIABLE_NUMBER` defaults to 999 before
//!   3.32.0 and 32766 since. The batching helpers of `predicate-sql-core`
//!   split long IN-lists around it.
//!
//! [Row values]: https://www.sqlite.org/rowvalue.html
//! [Parameter cap]: https://www.sqlite.org/limits.html#max_variable_number
//!
//! ## Example
//!
//! ```rust
//! use predicate_sql_core::build_tuple_comparison;
//! use predicate_sql_sqlite::SqliteEngine;
//!
//! let modern = SqliteEngine::new();
//! let predicate = build_tuple_comparison(&modern, &[("a", 1), ("b", 2)]).unwrap();
//! assert_eq!(predicate.sql(), "(a,b) > (?,?)");
//!
//! let old = SqliteEngine::parse_version("3.8.2").unwrap();
//! let predicate = build_tuple_comparison(&old, &[("a", 1), ("b", 2)]).unwrap();
//! assert_eq!(predicate.sql(), "(a >= ? AND (a > ? OR b > ?))");
//! ```

mod engine;

pub use engine::{SqliteEngine, SqliteVersion, SqliteVersionError};
