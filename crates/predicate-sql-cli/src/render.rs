//! Rendering predicates for the CLI subcommands.

use predicate_sql_core::{
    build_in_list, build_multi_column_in_list, build_not_in_list, build_tuple_comparison_with,
    in_list_batches, multi_column_in_list_batches, DatabaseEngine, RenderedPredicate,
    TupleDirection,
};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::value::{parse_key, parse_row, parse_value, to_json};

/// One rendered predicate as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredicateOutput {
    /// Predicate text.
    pub sql: String,
    /// Parameters in placeholder order.
    pub params: Vec<serde_json::Value>,
}

impl From<RenderedPredicate> for PredicateOutput {
    fn from(predicate: RenderedPredicate) -> Self {
        let params = predicate.params().iter().map(to_json).collect();
        let (sql, _) = predicate.build();
        Self { sql, params }
    }
}

/// Renders a keyset comparison from `column=value` keys.
pub fn render_tuple<E: DatabaseEngine + ?Sized>(
    engine: &E,
    keys: &[String],
    before: bool,
) -> Result<Vec<PredicateOutput>> {
    let cursor = keys
        .iter()
        .map(|key| parse_key(key))
        .collect::<Result<Vec<_>>>()?;
    let direction = if before {
        TupleDirection::Before
    } else {
        TupleDirection::After
    };
    let predicate = build_tuple_comparison_with(engine, &cursor, direction)?;
    Ok(vec![predicate.into()])
}

/// Renders a single-column membership predicate.
///
/// With `batch`, one predicate is printed per chunk that fits the engine's
/// parameter cap.
pub fn render_in_list<E: DatabaseEngine + ?Sized>(
    engine: &E,
    column: &str,
    values: &[String],
    negate: bool,
    batch: bool,
) -> Result<Vec<PredicateOutput>> {
    let values = values
        .iter()
        .map(|raw| parse_value(raw))
        .collect::<Result<Vec<_>>>()?;

    let predicates = if batch {
        let batches = in_list_batches(engine, column, values)?;
        info!(fragments = batches.len(), "Split IN list");
        batches
    } else if negate {
        vec![build_not_in_list(engine, column, values)?]
    } else {
        vec![build_in_list(engine, column, values)?]
    };
    Ok(predicates.into_iter().map(Into::into).collect())
}

/// Renders a multi-column membership predicate.
pub fn render_multi_in<E: DatabaseEngine + ?Sized>(
    engine: &E,
    columns: &[String],
    rows: &[String],
    batch: bool,
) -> Result<Vec<PredicateOutput>> {
    let rows = rows
        .iter()
        .map(|raw| parse_row(raw))
        .collect::<Result<Vec<_>>>()?;

    let predicates = if batch {
        let batches = multi_column_in_list_batches(engine, columns, &rows)?;
        info!(fragments = batches.len(), "Split multi-column IN list");
        batches
    } else {
        vec![build_multi_column_in_list(engine, columns, &rows)?]
    };
    Ok(predicates.into_iter().map(Into::into).collect())
}
