//! Tabular-shape compiler.
//!
//! Clause order is fixed: SELECT, FROM, WHERE, GROUP BY, ORDER BY/LIMIT.
//! WHERE, GROUP BY and ORDER BY are each gated by their toggle regardless of
//! whether their backing fields hold values.

use crate::error::Result;
use crate::models::{OrderByColumn, QueryBuilder, SelectColumn, SnowflakeObject};

use super::from_clause;

pub fn build_sql_for_query_builder(
    object: &SnowflakeObject,
    builder: &QueryBuilder,
) -> Result<String> {
    Ok([
        select_clause(&builder.select_columns),
        from_clause(object),
        where_clause(builder.has_filter, builder.where_string.as_deref()),
        group_by_clause(builder.has_group_by, &builder.group_by_columns),
        order_by_clause(builder.has_order_by, builder.order_by_column.as_ref()),
    ]
    .concat())
}

fn select_clause(columns: &[SelectColumn]) -> String {
    let items: Vec<String> = columns
        .iter()
        .filter_map(|selected| {
            let column = selected.column.as_ref()?;
            let expr = match selected.agg_func {
                Some(agg) => format!("{}({})", agg, column.name),
                None => column.name.clone(),
            };
            Some(match selected.alias.as_deref().filter(|a| !a.is_empty()) {
                Some(alias) => format!("{expr} AS \"{alias}\""),
                None => expr,
            })
        })
        .collect();

    if items.is_empty() {
        "SELECT *".to_string()
    } else {
        format!("SELECT {}", items.join(","))
    }
}

fn where_clause(has_filter: bool, where_string: Option<&str>) -> String {
    if !has_filter {
        return String::new();
    }
    match where_string.filter(|w| !w.is_empty()) {
        Some(where_string) => format!(" WHERE {where_string}"),
        None => String::new(),
    }
}

fn group_by_clause(has_group_by: bool, group_by_columns: &[String]) -> String {
    if !has_group_by {
        return String::new();
    }
    let columns: Vec<&str> = group_by_columns
        .iter()
        .map(String::as_str)
        .filter(|column| !column.is_empty())
        .collect();
    if columns.is_empty() {
        String::new()
    } else {
        format!(" GROUP BY {}", columns.join(","))
    }
}

fn order_by_clause(has_order_by: bool, order_by: Option<&OrderByColumn>) -> String {
    if !has_order_by {
        return String::new();
    }
    let order_by = order_by.cloned().unwrap_or_default();

    // The two fragments are independent: ORDER BY without LIMIT and LIMIT
    // without ORDER BY are both permitted.
    let order_stmt = match order_by.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => match order_by.sort_order {
            Some(sort_order) => format!(" ORDER BY {name} {sort_order}"),
            None => format!(" ORDER BY {name}"),
        },
        None => String::new(),
    };
    let limit_stmt = match order_by.limit.filter(|limit| *limit > 0) {
        Some(limit) => format!(" LIMIT {limit}"),
        None => String::new(),
    };

    format!("{order_stmt}{limit_stmt}")
}
