//! PostgreSQL engine.

use super::DatabaseEngine;

/// PostgreSQL binds at most this many parameters per statement (the wire
/// protocol counts them in a 16-bit field).
const POSTGRES_MAX_PARAMETERS: usize = 65535;

/// PostgreSQL: row-value comparison and `= ANY(array)` are both native.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresEngine;

impl PostgresEngine {
    /// Creates a new PostgreSQL engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DatabaseEngine for PostgresEngine {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn supports_tuple_comparison(&self) -> bool {
        true
    }

    fn supports_any_list(&self) -> bool {
        true
    }

    fn max_bound_parameters(&self) -> Option<usize> {
        Some(POSTGRES_MAX_PARAMETERS)
    }
}
