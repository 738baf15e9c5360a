//! Single-column membership predicates.

use tracing::trace;

use crate::engine::DatabaseEngine;
use crate::error::{PredicateError, Result};
use crate::predicate::{bind_placeholder, placeholder_list, RenderedPredicate};
use crate::value::{SqlValue, ToSqlValue};

/// Builds `column IN (...)` for `values`.
///
/// Engines with array binding get `column = ANY(?)` with the whole list as a
/// single [`SqlValue::Array`] parameter; others get one placeholder per
/// value. Duplicates are passed through as given.
///
/// # Errors
///
/// Returns [`PredicateError::InvalidArgument`] if `values` is empty or the
/// engine's placeholder is blank.
///
/// # Example
///
/// ```rust
/// use predicate_sql_core::builder::build_in_list;
/// use predicate_sql_core::engine::{GenericEngine, PostgresEngine};
///
/// let native = build_in_list(&PostgresEngine::new(), "id", vec![1, 2, 3]).unwrap();
/// assert_eq!(native.sql(), "id = ANY(?)");
/// assert_eq!(native.params().len(), 1);
///
/// let emulated = build_in_list(&GenericEngine::new(), "id", vec![1, 2, 3]).unwrap();
/// assert_eq!(emulated.sql(), "id IN (?,?,?)");
/// ```
pub fn build_in_list<E, I, V>(engine: &E, column: &str, values: I) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
    I: IntoIterator<Item = V>,
    V: ToSqlValue,
{
    render(engine, column, collect(values)?, false)
}

/// Builds `column NOT IN (...)` for `values`.
///
/// Engines with array binding get `column != ALL(?)`.
///
/// # Errors
///
/// Same conditions as [`build_in_list`].
pub fn build_not_in_list<E, I, V>(engine: &E, column: &str, values: I) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
    I: IntoIterator<Item = V>,
    V: ToSqlValue,
{
    render(engine, column, collect(values)?, true)
}

pub(crate) fn collect<I, V>(values: I) -> Result<Vec<SqlValue>>
where
    I: IntoIterator<Item = V>,
    V: ToSqlValue,
{
    let values: Vec<SqlValue> = values.into_iter().map(ToSqlValue::to_sql_value).collect();
    if values.is_empty() {
        return Err(PredicateError::invalid_argument(
            "membership predicate requires at least one value",
        ));
    }
    Ok(values)
}

pub(crate) fn render<E>(
    engine: &E,
    column: &str,
    values: Vec<SqlValue>,
    negated: bool,
) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
{
    let placeholder = bind_placeholder(engine)?;

    if engine.supports_any_list() {
        trace!(engine = engine.name(), len = values.len(), negated, "array membership");
        let op = if negated { "!= ALL" } else { "= ANY" };
        return Ok(RenderedPredicate::new(
            format!("{column} {op}({placeholder})"),
            vec![SqlValue::Array(values)],
        ));
    }

    trace!(engine = engine.name(), len = values.len(), negated, "explicit IN list");
    let keyword = if negated { "NOT IN" } else { "IN" };
    let sql = format!(
        "{column} {keyword} ({})",
        placeholder_list(placeholder, values.len())
    );
    Ok(RenderedPredicate::new(sql, values))
}
