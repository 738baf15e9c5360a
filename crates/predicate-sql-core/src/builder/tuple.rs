//! Keyset (tuple) comparison predicates.

use std::collections::HashSet;

use tracing::trace;

use crate::engine::DatabaseEngine;
use crate::error::{PredicateError, Result};
use crate::predicate::{bind_placeholder, placeholder_list, RenderedPredicate};
use crate::value::{SqlValue, ToSqlValue};

/// Which side of the cursor a keyset predicate selects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TupleDirection {
    /// Rows strictly after the cursor in lexicographic order (`>`).
    #[default]
    After,
    /// Rows strictly before the cursor in lexicographic order (`<`).
    Before,
}

impl TupleDirection {
    const fn strict(self) -> &'static str {
        match self {
            Self::After => ">",
            Self::Before => "<",
        }
    }

    const fn inclusive(self) -> &'static str {
        match self {
            Self::After => ">=",
            Self::Before => "<=",
        }
    }
}

/// Builds a predicate selecting rows strictly after `cursor`.
///
/// `cursor` lists `(column, value)` pairs, most significant first. Engines
/// with native row-value comparison get `(a,b) > (?,?)`; others get the
/// nested expansion
///
/// ```text
/// (a >= ? AND (a > ? OR b > ?))
/// ```
///
/// where every non-final value is bound twice.
///
/// # Errors
///
/// Returns [`PredicateError::InvalidArgument`] if `cursor` is empty, names
/// the same column twice, or the engine's placeholder is blank.
///
/// # Example
///
/// ```rust
/// use predicate_sql_core::builder::build_tuple_comparison;
/// use predicate_sql_core::engine::GenericEngine;
/// use predicate_sql_core::SqlValue;
///
/// let (sql, params) = build_tuple_comparison(&GenericEngine::new(), &[("a", 1), ("b", 2)])
///     .unwrap()
///     .build();
/// assert_eq!(sql, "(a >= ? AND (a > ? OR b > ?))");
/// assert_eq!(params, [SqlValue::Int(1), SqlValue::Int(1), SqlValue::Int(2)]);
/// ```
pub fn build_tuple_comparison<E, C, V>(engine: &E, cursor: &[(C, V)]) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
    C: AsRef<str>,
    V: ToSqlValue + Clone,
{
    build_tuple_comparison_with(engine, cursor, TupleDirection::After)
}

/// Builds a keyset predicate on either side of `cursor`.
///
/// [`TupleDirection::Before`] mirrors [`build_tuple_comparison`] with `<`
/// and `<=`, for paging backwards through the same sort order.
///
/// # Errors
///
/// Same conditions as [`build_tuple_comparison`].
pub fn build_tuple_comparison_with<E, C, V>(
    engine: &E,
    cursor: &[(C, V)],
    direction: TupleDirection,
) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
    C: AsRef<str>,
    V: ToSqlValue + Clone,
{
    let Some((head, tail)) = cursor.split_first() else {
        return Err(PredicateError::invalid_argument(
            "tuple comparison requires at least one column",
        ));
    };
    check_distinct_columns(cursor)?;

    let placeholder = bind_placeholder(engine)?;

    if engine.supports_tuple_comparison() && !tail.is_empty() {
        trace!(engine = engine.name(), arity = cursor.len(), "native tuple comparison");
        let columns: Vec<&str> = cursor.iter().map(|(c, _)| c.as_ref()).collect();
        let params = cursor
            .iter()
            .map(|(_, v)| v.clone().to_sql_value())
            .collect();
        let sql = format!(
            "({}) {} ({})",
            columns.join(","),
            direction.strict(),
            placeholder_list(placeholder, cursor.len())
        );
        return Ok(RenderedPredicate::new(sql, params));
    }

    trace!(engine = engine.name(), arity = cursor.len(), "emulated tuple comparison");
    let mut params = Vec::with_capacity(cursor.len() * 2 - 1);
    let sql = render_emulated(head, tail, direction, placeholder, &mut params);
    Ok(RenderedPredicate::new(sql, params))
}

/// Renders `E(i)` for the cursor position holding `head`.
///
/// Parameters are pushed in the order their placeholders appear.
fn render_emulated<C, V>(
    head: &(C, V),
    tail: &[(C, V)],
    direction: TupleDirection,
    placeholder: &str,
    params: &mut Vec<SqlValue>,
) -> String
where
    C: AsRef<str>,
    V: ToSqlValue + Clone,
{
    let (column, value) = head;
    let column = column.as_ref();
    let strict = direction.strict();

    match tail.split_first() {
        None => {
            params.push(value.clone().to_sql_value());
            format!("{column} {strict} {placeholder}")
        }
        Some((next, rest)) => {
            let value = value.clone().to_sql_value();
            params.push(value.clone());
            params.push(value);
            let nested = render_emulated(next, rest, direction, placeholder, params);
            format!(
                "({column} {} {placeholder} AND ({column} {strict} {placeholder} OR {nested}))",
                direction.inclusive()
            )
        }
    }
}

fn check_distinct_columns<C: AsRef<str>, V>(cursor: &[(C, V)]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cursor.len());
    for (column, _) in cursor {
        if !seen.insert(column.as_ref()) {
            return Err(PredicateError::invalid_argument(format!(
                "column `{}` appears more than once in the cursor",
                column.as_ref()
            )));
        }
    }
    Ok(())
}
