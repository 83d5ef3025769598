//! Time-series-shape compiler.
//!
//! Unlike the tabular compiler, WHERE, GROUP BY, ORDER BY and LIMIT are not
//! toggle-gated: charted output must be time-filtered, bucketed and
//! time-ordered, so those clauses are always emitted. The `$__timeGroup` and
//! `$__timeFilter` macros are emitted literally; the backend expands them at
//! execution time, so their spelling and argument order are load-bearing.

use crate::error::{Result, SunflakeError};
use crate::models::{MetricColumn, SnowflakeObject, TableColumn, TimeSeries};

use super::from_clause;

pub fn build_sql_for_time_series(
    object: &SnowflakeObject,
    time_series: &TimeSeries,
) -> Result<String> {
    let time_column = time_series
        .time_column
        .as_ref()
        .ok_or_else(|| SunflakeError::Sql("time column is not set".to_string()))?;

    let time_group = time_group_macro(time_column, time_series);
    let time_filter = format!("$__timeFilter({})", time_column.name);
    let line_ids = line_id_fragment(&time_series.line_identifiers);

    Ok([
        select_clause(&time_group, &line_ids, &time_series.metrics)?,
        from_clause(object),
        where_clause(&time_filter, time_series.filter_string.as_deref()),
        format!(" GROUP BY \"time\"{line_ids}"),
        format!(" ORDER BY \"time\" LIMIT {}", time_series.row_limit),
    ]
    .concat())
}

fn time_group_macro(time_column: &TableColumn, time_series: &TimeSeries) -> String {
    format!(
        "$__timeGroup({}, '{}{}', {})",
        time_column.name, time_series.interval, time_series.time_unit, time_series.fill_missing
    )
}

/// Non-empty legend columns, rendered as a `, a, b` tail for both the SELECT
/// list and the GROUP BY clause.
fn line_id_fragment(line_identifiers: &[String]) -> String {
    let line_ids: Vec<&str> = line_identifiers
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .collect();
    if line_ids.is_empty() {
        String::new()
    } else {
        format!(", {}", line_ids.join(", "))
    }
}

fn select_clause(time_group: &str, line_ids: &str, metrics: &[MetricColumn]) -> Result<String> {
    let items: Vec<String> = metrics
        .iter()
        .filter_map(|metric| {
            let column = metric
                .column
                .as_ref()
                .filter(|column| !column.name.is_empty())?;
            let expr = format!("{}({})", metric.agg_func, column.name);
            Some(match metric.alias.as_deref().filter(|a| !a.is_empty()) {
                Some(alias) => format!("{expr} AS \"{alias}\""),
                None => expr,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(SunflakeError::Sql(
            "no metric columns selected".to_string(),
        ));
    }

    Ok(format!(
        "SELECT {} AS \"time\"{}, {}",
        time_group,
        line_ids,
        items.join(", ")
    ))
}

fn where_clause(time_filter: &str, filter_string: Option<&str>) -> String {
    match filter_string.filter(|f| !f.is_empty()) {
        Some(filter_string) => format!(" WHERE {time_filter} AND {filter_string}"),
        None => format!(" WHERE {time_filter}"),
    }
}
