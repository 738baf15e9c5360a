//! Splitting long membership lists around an engine's parameter cap.
//!
//! SQLite, for instance, refuses statements binding more than 999 (or 32766)
//! parameters. These helpers render one fragment per chunk so that each fits.
//! Run one statement per fragment and merge the results; joining the
//! fragments back into a single statement binds every value again and hits
//! the same cap.

use tracing::debug;

use super::{in_list, multi_column};
use crate::engine::DatabaseEngine;
use crate::error::{PredicateError, Result};
use crate::predicate::RenderedPredicate;
use crate::value::ToSqlValue;

/// Renders `column IN (...)` fragments that each respect the engine's
/// parameter cap.
///
/// Engines that bind the list as one array parameter, or that report no cap,
/// always get a single fragment.
///
/// # Errors
///
/// Same conditions as [`build_in_list`](super::build_in_list), plus
/// [`PredicateError::InvalidArgument`] when the engine reports a cap of zero.
pub fn in_list_batches<E, I, V>(
    engine: &E,
    column: &str,
    values: I,
) -> Result<Vec<RenderedPredicate>>
where
    E: DatabaseEngine + ?Sized,
    I: IntoIterator<Item = V>,
    V: ToSqlValue,
{
    let values = in_list::collect(values)?;

    let cap = engine
        .max_bound_parameters()
        .filter(|_| !engine.supports_any_list());
    let chunk_size = match cap {
        None => values.len(),
        Some(0) => {
            return Err(PredicateError::invalid_argument(
                "engine reports a bound-parameter cap of zero",
            ))
        }
        Some(max) => max,
    };

    debug!(
        engine = engine.name(),
        values = values.len(),
        chunk_size,
        "batching IN list"
    );
    values
        .chunks(chunk_size)
        .map(|chunk| in_list::render(engine, column, chunk.to_vec(), false))
        .collect()
}

/// Renders multi-column membership fragments that each respect the engine's
/// parameter cap.
///
/// Rows are never split: each fragment binds whole rows, as many as fit.
///
/// # Errors
///
/// Same conditions as
/// [`build_multi_column_in_list`](super::build_multi_column_in_list), plus
/// [`PredicateError::InvalidArgument`] when a single row has more values than
/// the engine can bind.
pub fn multi_column_in_list_batches<E, C, R, V>(
    engine: &E,
    columns: &[C],
    rows: &[R],
) -> Result<Vec<RenderedPredicate>>
where
    E: DatabaseEngine + ?Sized,
    C: AsRef<str>,
    R: AsRef<[V]>,
    V: ToSqlValue + Clone,
{
    let columns = multi_column::column_names(columns)?;
    let rows = multi_column::collect_rows(&columns, rows)?;

    let rows_per_chunk = match engine.max_bound_parameters() {
        None => rows.len(),
        Some(max) if max < columns.len() => {
            return Err(PredicateError::invalid_argument(format!(
                "a row of {} values exceeds the engine's cap of {max} parameters",
                columns.len()
            )))
        }
        Some(max) => max / columns.len(),
    };

    debug!(
        engine = engine.name(),
        rows = rows.len(),
        rows_per_chunk,
        "batching multi-column IN list"
    );
    rows.chunks(rows_per_chunk)
        .map(|chunk| multi_column::render(engine, &columns, chunk))
        .collect()
}
