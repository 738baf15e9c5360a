//! Generic SQL engine.

use super::DatabaseEngine;

/// An engine assumed to support neither row-value comparison nor array
/// binding. Every predicate renders in its emulated form, which any SQL
/// engine accepts.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericEngine;

impl GenericEngine {
    /// Creates a new generic engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DatabaseEngine for GenericEngine {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn supports_tuple_comparison(&self) -> bool {
        false
    }

    fn supports_any_list(&self) -> bool {
        false
    }
}
