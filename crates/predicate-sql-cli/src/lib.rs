//! Command-line front end for `predicate-sql-core`.
//!
//! Renders keyset and membership predicates for a chosen engine and prints
//! them as JSON, one object per line:
//!
//! ```bash
//! # Keyset predicate for an engine without row values
//! predicate-sql tuple --key stream_ordering=10 --key id=3
//!
//! # IN list, PostgreSQL style
//! predicate-sql --engine postgres in-list --column room_id --value '!a:example.org'
//!
//! # Multi-column membership on an old SQLite
//! predicate-sql --engine sqlite --sqlite-version 3.11.0 \
//!     multi-in --columns a,b --row 1,2 --row 3,4
//! ```

pub mod engine;
pub mod error;
pub mod render;
pub mod value;

pub use engine::{configure_engine, EngineKind};
pub use error::{CliError, Result};
pub use render::{render_in_list, render_multi_in, render_tuple, PredicateOutput};
