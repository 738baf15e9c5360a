//! Rendered predicates and placeholder bookkeeping.

use crate::engine::DatabaseEngine;
use crate::error::{PredicateError, Result};
use crate::value::SqlValue;

/// A predicate fragment: SQL text with positional placeholders plus the
/// values bound to them.
///
/// The Nth placeholder in [`sql`](Self::sql) binds the Nth entry of
/// [`params`](Self::params).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPredicate {
    sql: String,
    params: Vec<SqlValue>,
}

impl RenderedPredicate {
    pub(crate) const fn new(sql: String, params: Vec<SqlValue>) -> Self {
        Self { sql, params }
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Consumes the predicate and returns the SQL and parameters.
    #[must_use]
    pub fn build(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.params)
    }

    /// Combines two predicates with AND, parenthesizing both sides.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        self.combine("AND", other)
    }

    /// Combines two predicates with OR, parenthesizing both sides.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        self.combine("OR", other)
    }

    fn combine(self, op: &str, other: Self) -> Self {
        let mut params = self.params;
        params.extend(other.params);
        Self {
            sql: format!("({}) {op} ({})", self.sql, other.sql),
            params,
        }
    }
}

impl From<RenderedPredicate> for (String, Vec<SqlValue>) {
    fn from(predicate: RenderedPredicate) -> Self {
        predicate.build()
    }
}

/// Returns the engine's placeholder, rejecting one that would render no
/// bind site.
pub(crate) fn bind_placeholder<E>(engine: &E) -> Result<&str>
where
    E: DatabaseEngine + ?Sized,
{
    let placeholder = engine.parameter_placeholder();
    if placeholder.trim().is_empty() {
        return Err(PredicateError::invalid_argument(format!(
            "engine `{}` has an empty parameter placeholder",
            engine.name()
        )));
    }
    Ok(placeholder)
}

/// Renders `n` placeholders joined by commas, without surrounding parens.
pub(crate) fn placeholder_list(placeholder: &str, n: usize) -> String {
    vec![placeholder; n].join(",")
}
