//! Multi-column (row-value) membership predicates.

use tracing::trace;

use crate::engine::DatabaseEngine;
use crate::error::{PredicateError, Result};
use crate::predicate::{bind_placeholder, placeholder_list, RenderedPredicate};
use crate::value::{SqlValue, ToSqlValue};

/// Builds a predicate matching rows whose `columns` equal any of `rows`.
///
/// Each entry of `rows` holds one value per column, in column order. Engines
/// with native row-value comparison get
/// `(a,b) IN (VALUES (?,?),(?,?))`; others get a disjunction of
/// conjunctions, `((a = ? AND b = ?) OR (a = ? AND b = ?))`. Parameters are
/// flattened row-major in both forms.
///
/// The branch follows [`DatabaseEngine::supports_tuple_comparison`], not the
/// array capability: the `VALUES` form relies on row-value equality.
///
/// # Errors
///
/// Returns [`PredicateError::InvalidArgument`] if `columns` or `rows` is
/// empty, if a row's length differs from the number of columns, or if the
/// engine's placeholder is blank.
///
/// # Example
///
/// ```rust
/// use predicate_sql_core::builder::build_multi_column_in_list;
/// use predicate_sql_core::engine::PostgresEngine;
///
/// let predicate =
///     build_multi_column_in_list(&PostgresEngine::new(), &["a", "b"], &[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(predicate.sql(), "(a,b) IN (VALUES (?,?),(?,?))");
/// ```
pub fn build_multi_column_in_list<E, C, R, V>(
    engine: &E,
    columns: &[C],
    rows: &[R],
) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
    C: AsRef<str>,
    R: AsRef<[V]>,
    V: ToSqlValue + Clone,
{
    let columns = column_names(columns)?;
    let rows = collect_rows(&columns, rows)?;
    render(engine, &columns, &rows)
}

pub(crate) fn column_names<C: AsRef<str>>(columns: &[C]) -> Result<Vec<&str>> {
    if columns.is_empty() {
        return Err(PredicateError::invalid_argument(
            "multi-column membership requires at least one column",
        ));
    }
    Ok(columns.iter().map(AsRef::as_ref).collect())
}

/// Converts and validates every row before anything is rendered.
pub(crate) fn collect_rows<R, V>(columns: &[&str], rows: &[R]) -> Result<Vec<Vec<SqlValue>>>
where
    R: AsRef<[V]>,
    V: ToSqlValue + Clone,
{
    if rows.is_empty() {
        return Err(PredicateError::invalid_argument(
            "membership predicate requires at least one value",
        ));
    }
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            if row.len() != columns.len() {
                return Err(PredicateError::invalid_argument(format!(
                    "row {index} has {} values but {} columns were given",
                    row.len(),
                    columns.len()
                )));
            }
            Ok(row.iter().cloned().map(ToSqlValue::to_sql_value).collect())
        })
        .collect()
}

pub(crate) fn render<E>(
    engine: &E,
    columns: &[&str],
    rows: &[Vec<SqlValue>],
) -> Result<RenderedPredicate>
where
    E: DatabaseEngine + ?Sized,
{
    let placeholder = bind_placeholder(engine)?;
    let params: Vec<SqlValue> = rows.iter().flatten().cloned().collect();

    if engine.supports_tuple_comparison() {
        trace!(engine = engine.name(), columns = columns.len(), rows = rows.len(), "VALUES membership");
        let group = format!("({})", placeholder_list(placeholder, columns.len()));
        let groups = vec![group.as_str(); rows.len()].join(",");
        let sql = format!("({}) IN (VALUES {groups})", columns.join(","));
        return Ok(RenderedPredicate::new(sql, params));
    }

    trace!(engine = engine.name(), columns = columns.len(), rows = rows.len(), "OR-of-AND membership");
    let conjunction = columns
        .iter()
        .map(|column| format!("{column} = {placeholder}"))
        .collect::<Vec<_>>()
        .join(" AND ");
    let branch = format!("({conjunction})");
    let sql = format!("({})", vec![branch.as_str(); rows.len()].join(" OR "));
    Ok(RenderedPredicate::new(sql, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineCapabilities, GenericEngine, PostgresEngine};

    fn ints(values: &[i64]) -> Vec<SqlValue> {
        values.iter().copied().map(SqlValue::Int).collect()
    }

    #[test]
    fn test_native_multi_column_in_list() {
        let engine = EngineCapabilities::new().with_tuple_comparison(true);
        let (sql, params) = build_multi_column_in_list(&engine, &["a", "b"], &[[1, 2], [3, 4]])
            .unwrap()
            .build();
        assert_eq!(sql, "(a,b) IN (VALUES (?,?),(?,?))");
        assert_eq!(params, ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_emulated_multi_column_in_list() {
        let engine = EngineCapabilities::new().with_tuple_comparison(false);
        let (sql, params) = build_multi_column_in_list(&engine, &["a", "b"], &[[1, 2], [3, 4]])
            .unwrap()
            .build();
        assert_eq!(sql, "((a = ? AND b = ?) OR (a = ? AND b = ?))");
        assert_eq!(params, ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn test_array_flag_does_not_select_native_form() {
        let engine = EngineCapabilities::new().with_any_list(true);
        let predicate = build_multi_column_in_list(&engine, &["a", "b"], &[[1, 2]]).unwrap();
        assert_eq!(predicate.sql(), "((a = ? AND b = ?))");
    }

    #[test]
    fn test_single_row() {
        let native =
            build_multi_column_in_list(&PostgresEngine::new(), &["a", "b"], &[[5, 6]]).unwrap();
        assert_eq!(native.sql(), "(a,b) IN (VALUES (?,?))");

        let emulated =
            build_multi_column_in_list(&GenericEngine::new(), &["a", "b"], &[[5, 6]]).unwrap();
        assert_eq!(emulated.sql(), "((a = ? AND b = ?))");
        assert_eq!(emulated.params(), ints(&[5, 6]));
    }

    #[test]
    fn test_single_column() {
        let native =
            build_multi_column_in_list(&PostgresEngine::new(), &["a"], &[[1], [2], [3]]).unwrap();
        assert_eq!(native.sql(), "(a) IN (VALUES (?),(?),(?))");
        assert_eq!(native.params(), ints(&[1, 2, 3]));

        let emulated =
            build_multi_column_in_list(&GenericEngine::new(), &["a"], &[[1], [2], [3]]).unwrap();
        assert_eq!(emulated.sql(), "((a = ?) OR (a = ?) OR (a = ?))");
        assert_eq!(emulated.params(), ints(&[1, 2, 3]));
    }

    #[test]
    fn test_three_columns_row_major() {
        let rows = vec![
            vec![SqlValue::Text(String::from("room")), SqlValue::Int(1), SqlValue::Bool(true)],
            vec![SqlValue::Text(String::from("user")), SqlValue::Int(2), SqlValue::Null],
        ];
        let predicate =
            build_multi_column_in_list(&GenericEngine::new(), &["kind", "id", "flag"], &rows)
                .unwrap();
        assert_eq!(
            predicate.sql(),
            "((kind = ? AND id = ? AND flag = ?) OR (kind = ? AND id = ? AND flag = ?))"
        );
        assert_eq!(predicate.params(), rows.concat());
    }

    #[test]
    fn test_arity_mismatch_rejected() {
        let rows = vec![vec![1, 2], vec![3]];
        let err = build_multi_column_in_list(&PostgresEngine::new(), &["a", "b"], &rows).unwrap_err();
        assert_eq!(
            err,
            PredicateError::InvalidArgument(String::from(
                "row 1 has 1 values but 2 columns were given"
            ))
        );
    }

    #[test]
    fn test_empty_rows_rejected() {
        let rows: Vec<Vec<i64>> = vec![];
        let err = build_multi_column_in_list(&GenericEngine::new(), &["a", "b"], &rows).unwrap_err();
        assert!(matches!(err, PredicateError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_columns_rejected() {
        let columns: [&str; 0] = [];
        let rows: Vec<Vec<i64>> = vec![vec![]];
        let err = build_multi_column_in_list(&GenericEngine::new(), &columns, &rows).unwrap_err();
        assert!(matches!(err, PredicateError::InvalidArgument(_)));
    }

    #[test]
    fn test_custom_placeholder() {
        let engine = EngineCapabilities::new().with_placeholder("%s");
        let predicate = build_multi_column_in_list(&engine, &["a", "b"], &[[1, 2]]).unwrap();
        assert_eq!(predicate.sql(), "((a = %s AND b = %s))");
    }

    #[test]
    fn test_blank_placeholder_rejected() {
        for native in [false, true] {
            let engine = EngineCapabilities::new()
                .with_tuple_comparison(native)
                .with_placeholder("");
            let err = build_multi_column_in_list(&engine, &["a", "b"], &[[1, 2]]).unwrap_err();
            assert!(matches!(err, PredicateError::InvalidArgument(_)));
        }
    }
}
