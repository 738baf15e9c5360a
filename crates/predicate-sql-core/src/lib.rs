//! # predicate-sql-core
//!
//! Engine-portable SQL predicate fragments for two recurring query patterns:
//!
//! - **Keyset pagination**: rows strictly after (or before) a composite
//!   cursor, e.g. `(a,b) > (?,?)`.
//! - **Membership filtering**: single-column `IN` lists and multi-column
//!   row-value `IN` lists.
//!
//! Engines differ in what they accept. A [`DatabaseEngine`] answers two
//! capability questions and every builder picks between the native form and
//! an emulation built from `AND`/`OR` that selects the same rows.
//!
//! Builders return a [`RenderedPredicate`]: SQL text with positional
//! placeholders and the parameters bound to them, in order. Values are never
//! inlined into the text.
//!
//! ```rust
//! use predicate_sql_core::builder::build_tuple_comparison;
//! use predicate_sql_core::engine::{GenericEngine, PostgresEngine};
//!
//! let cursor = [("a", 1), ("b", 2), ("c", 3)];
//!
//! let native = build_tuple_comparison(&PostgresEngine::new(), &cursor).unwrap();
//! assert_eq!(native.sql(), "(a,b,c) > (?,?,?)");
//!
//! let emulated = build_tuple_comparison(&GenericEngine::new(), &cursor).unwrap();
//! assert_eq!(
//!     emulated.sql(),
//!     "(a >= ? AND (a > ? OR (b >= ? AND (b > ? OR c > ?))))"
//! );
//! assert_eq!(emulated.params().len(), 5);
//! ```

pub mod builder;
pub mod engine;
mod error;
mod predicate;
pub mod value;

pub use builder::{
    build_in_list, build_multi_column_in_list, build_not_in_list, build_tuple_comparison,
    build_tuple_comparison_with, in_list_batches, multi_column_in_list_batches, TupleDirection,
};
pub use engine::{DatabaseEngine, EngineCapabilities, GenericEngine, PostgresEngine};
pub use error::{PredicateError, Result};
pub use predicate::RenderedPredicate;
pub use value::{SqlValue, ToSqlValue};
