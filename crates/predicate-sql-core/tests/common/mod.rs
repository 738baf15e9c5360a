#![allow(dead_code)]

use predicate_sql_core::{EngineCapabilities, SqlValue};

/// Both branches of every builder, as plain capability descriptors.
pub fn native() -> EngineCapabilities {
    EngineCapabilities::new()
        .with_name("native")
        .with_tuple_comparison(true)
        .with_any_list(true)
}

pub fn emulated() -> EngineCapabilities {
    EngineCapabilities::new().with_name("emulated")
}

pub fn ints(values: &[i64]) -> Vec<SqlValue> {
    values.iter().copied().map(SqlValue::Int).collect()
}

pub fn placeholder_count(sql: &str, placeholder: &str) -> usize {
    sql.matches(placeholder).count()
}

/// Returns, for each placeholder of an emulated rendering, the column it is
/// compared against (`col >= ?`, `col = ?`, ...).
pub fn compared_columns(sql: &str, placeholder: &str) -> Vec<String> {
    let mut segments: Vec<&str> = sql.split(placeholder).collect();
    // The text after the last placeholder compares nothing.
    segments.pop();
    segments
        .iter()
        .map(|segment| {
            let before_op = segment
                .trim_end()
                .trim_end_matches(['>', '<', '=', '!'])
                .trim_end();
            before_op
                .rsplit([' ', '('])
                .next()
                .unwrap_or_else(|| panic!("no column before placeholder in {sql}"))
                .to_string()
        })
        .collect()
}
