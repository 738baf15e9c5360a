//! Engine selection from command-line configuration.

use clap::ValueEnum;
use predicate_sql_core::{DatabaseEngine, EngineCapabilities, GenericEngine, PostgresEngine};
use predicate_sql_sqlite::SqliteEngine;
use tracing::{debug, warn};

use crate::error::Result;

/// Engines selectable with `--engine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Emulated forms only.
    Generic,
    /// PostgreSQL: row values and array binding.
    Postgres,
    /// SQLite: row values from 3.15.0, no array binding.
    Sqlite,
}

/// Builds the engine descriptor for the given configuration.
///
/// `sqlite_version` only applies to [`EngineKind::Sqlite`]; `placeholder`
/// overrides the engine's bind symbol.
pub fn configure_engine(
    kind: EngineKind,
    sqlite_version: Option<&str>,
    placeholder: Option<&str>,
) -> Result<EngineCapabilities> {
    let caps = match kind {
        EngineKind::Generic => EngineCapabilities::of(&GenericEngine::new()),
        EngineKind::Postgres => EngineCapabilities::of(&PostgresEngine::new()),
        EngineKind::Sqlite => match sqlite_version {
            Some(version) => EngineCapabilities::of(&SqliteEngine::parse_version(version)?),
            None => EngineCapabilities::of(&SqliteEngine::new()),
        },
    };

    if kind != EngineKind::Sqlite && sqlite_version.is_some() {
        warn!(engine = caps.name(), "Ignoring --sqlite-version for a non-SQLite engine");
    }

    let caps = match placeholder {
        Some(symbol) => caps.with_placeholder(symbol.to_string()),
        None => caps,
    };

    debug!(
        engine = caps.name(),
        tuple_comparison = caps.supports_tuple_comparison(),
        any_list = caps.supports_any_list(),
        placeholder = caps.parameter_placeholder(),
        "Configured engine"
    );
    Ok(caps)
}
