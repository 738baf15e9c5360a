//! Predicate builders.
//!
//! Each builder is a pure function of its arguments: it asks the engine which
//! forms it supports, then renders either the native expression or an
//! equivalent emulation from boolean connectives. The parameter list always
//! follows placeholder order.
//!
//! # Example
//!
//! ```rust
//! use predicate_sql_core::builder::{build_in_list, build_tuple_comparison};
//! use predicate_sql_core::engine::PostgresEngine;
//!
//! let engine = PostgresEngine::new();
//! let after = build_tuple_comparison(&engine, &[("stream_ordering", 10), ("id", 3)]).unwrap();
//! let rooms = build_in_list(&engine, "room_id", ["!a:example.org", "!b:example.org"]).unwrap();
//!
//! let (sql, params) = after.and(rooms).build();
//! assert_eq!(sql, "((stream_ordering,id) > (?,?)) AND (room_id = ANY(?))");
//! assert_eq!(params.len(), 3);
//! ```

mod batch;
mod in_list;
mod multi_column;
mod tuple;

pub use batch::{in_list_batches, multi_column_in_list_batches};
pub use in_list::{build_in_list, build_not_in_list};
pub use multi_column::build_multi_column_in_list;
pub use tuple::{build_tuple_comparison, build_tuple_comparison_with, TupleDirection};
