//! Integration tests for SQL synthesis.
//!
//! These pin the exact byte shapes of generated queries, macro spellings
//! included, since the backend's macro expansion depends on them.

use sunflake::build_query::{
    build_query, build_sql_for_query_builder, build_sql_for_time_series, try_build_query,
};
use sunflake::models::{
    AggregateFunc, DataFormat, FillMissing, MetricColumn, OrderByColumn, QueryBuilder,
    SelectColumn, SnowflakeObject, SortOrder, SunflakeState, TableColumn, TimeSeries, TimeUnit,
};

fn object() -> SnowflakeObject {
    SnowflakeObject {
        database: Some("PROD".into()),
        schema: Some("PUBLIC".into()),
        table: Some("ORDERS".into()),
        ..Default::default()
    }
}

fn metric(name: &str, agg: AggregateFunc) -> MetricColumn {
    MetricColumn {
        column: Some(TableColumn::new(name, "NUMBER")),
        alias: None,
        agg_func: agg,
    }
}

#[test]
fn empty_select_slots_compile_to_select_star() {
    let builder = QueryBuilder::default();
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert_eq!(sql, "SELECT * FROM PROD.PUBLIC.ORDERS");
}

#[test]
fn from_clause_is_omitted_without_a_table() {
    let builder = QueryBuilder::default();
    let sql = build_sql_for_query_builder(&SnowflakeObject::default(), &builder).unwrap();
    assert_eq!(sql, "SELECT *");
}

#[test]
fn aggregate_and_alias_render_exactly() {
    let mut builder = QueryBuilder::default();
    builder.select_columns = vec![SelectColumn {
        column: Some(TableColumn::new("A", "NUMBER")),
        alias: Some("total".into()),
        agg_func: Some(AggregateFunc::Sum),
    }];
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert_eq!(sql, "SELECT SUM(A) AS \"total\" FROM PROD.PUBLIC.ORDERS");
}

#[test]
fn select_list_skips_empty_slots() {
    let mut builder = QueryBuilder::default();
    builder.select_columns = vec![
        SelectColumn::default(),
        SelectColumn {
            column: Some(TableColumn::new("A", "NUMBER")),
            ..Default::default()
        },
        SelectColumn {
            column: Some(TableColumn::new("B", "NUMBER")),
            ..Default::default()
        },
    ];
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(sql.starts_with("SELECT A,B "), "got: {sql}");
}

#[test]
fn where_clause_is_gated_by_the_toggle() {
    let mut builder = QueryBuilder::default();
    builder.where_string = Some("AMOUNT > 0".into());

    builder.has_filter = false;
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(!sql.contains("WHERE"), "got: {sql}");

    builder.has_filter = true;
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(sql.ends_with(" WHERE AMOUNT > 0"), "got: {sql}");
}

#[test]
fn group_by_filters_empty_entries() {
    let mut builder = QueryBuilder::default();
    builder.has_group_by = true;
    builder.group_by_columns = vec!["".into(), "REGION".into(), "".into(), "HOST".into()];
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(sql.ends_with(" GROUP BY REGION,HOST"), "got: {sql}");

    // nothing left after filtering: clause omitted entirely
    builder.group_by_columns = vec!["".into()];
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(!sql.contains("GROUP BY"), "got: {sql}");
}

#[test]
fn order_by_and_limit_are_independent() {
    let mut builder = QueryBuilder::default();
    builder.has_order_by = true;

    builder.order_by_column = Some(OrderByColumn {
        name: Some("AMOUNT".into()),
        sort_order: Some(SortOrder::Desc),
        limit: None,
    });
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(sql.ends_with(" ORDER BY AMOUNT DESC"), "got: {sql}");

    // LIMIT without ORDER BY is odd but permitted
    builder.order_by_column = Some(OrderByColumn {
        name: None,
        sort_order: None,
        limit: Some(10),
    });
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(sql.ends_with(" LIMIT 10"), "got: {sql}");
    assert!(!sql.contains("ORDER BY"), "got: {sql}");

    // zero limit is treated as unset
    builder.order_by_column = Some(OrderByColumn {
        name: None,
        sort_order: None,
        limit: Some(0),
    });
    let sql = build_sql_for_query_builder(&object(), &builder).unwrap();
    assert!(!sql.contains("LIMIT"), "got: {sql}");
}

#[test]
fn time_series_renders_macros_and_fixed_clauses() {
    let mut time_series = TimeSeries::default();
    time_series.time_column = Some(TableColumn::new("TS", "TIMESTAMP_NTZ"));
    time_series.interval = 5;
    time_series.time_unit = TimeUnit::Minute;
    time_series.fill_missing = FillMissing::Zero;
    time_series.metrics = vec![metric("V", AggregateFunc::Avg)];

    let sql = build_sql_for_time_series(&object(), &time_series).unwrap();
    assert!(
        sql.starts_with("SELECT $__timeGroup(TS, '5m', 0) AS \"time\", AVG(V)"),
        "got: {sql}"
    );
    assert!(sql.contains(" FROM PROD.PUBLIC.ORDERS"), "got: {sql}");
    assert!(sql.contains(" WHERE $__timeFilter(TS)"), "got: {sql}");
    assert!(sql.contains(" GROUP BY \"time\""), "got: {sql}");
    assert!(sql.ends_with(" ORDER BY \"time\" LIMIT 1000"), "got: {sql}");
}

#[test]
fn time_series_includes_legend_columns_in_select_and_group_by() {
    let mut time_series = TimeSeries::default();
    time_series.time_column = Some(TableColumn::new("TS", "TIMESTAMP_NTZ"));
    time_series.line_identifiers = vec!["HOST".into(), "".into(), "REGION".into()];
    time_series.metrics = vec![
        metric("V", AggregateFunc::Max),
        MetricColumn {
            column: Some(TableColumn::new("W", "NUMBER")),
            alias: Some("w_avg".into()),
            agg_func: AggregateFunc::Avg,
        },
    ];

    let sql = build_sql_for_time_series(&object(), &time_series).unwrap();
    assert!(
        sql.contains("AS \"time\", HOST, REGION, MAX(V), AVG(W) AS \"w_avg\""),
        "got: {sql}"
    );
    assert!(sql.contains("GROUP BY \"time\", HOST, REGION"), "got: {sql}");
}

#[test]
fn time_series_ands_the_user_filter_after_the_time_filter() {
    let mut time_series = TimeSeries::default();
    time_series.time_column = Some(TableColumn::new("TS", "TIMESTAMP_NTZ"));
    time_series.metrics = vec![metric("V", AggregateFunc::Max)];
    time_series.filter_string = Some("REGION = 'eu'".into());

    let sql = build_sql_for_time_series(&object(), &time_series).unwrap();
    assert!(
        sql.contains(" WHERE $__timeFilter(TS) AND REGION = 'eu' "),
        "got: {sql}"
    );
}

#[test]
fn time_series_requires_time_column_and_metrics() {
    let mut time_series = TimeSeries::default();
    time_series.metrics = vec![metric("V", AggregateFunc::Avg)];
    assert!(build_sql_for_time_series(&object(), &time_series).is_err());

    time_series.time_column = Some(TableColumn::new("TS", "TIMESTAMP_NTZ"));
    // one default slot with no column selected: nothing to project
    time_series.metrics = vec![MetricColumn::default()];
    assert!(build_sql_for_time_series(&object(), &time_series).is_err());
}

#[test]
fn build_query_dispatches_on_data_format() {
    let mut state = SunflakeState::default();
    state.snowflake_object = Some(object());
    state.data_format = Some(DataFormat::Table);
    state.query_builder = Some(QueryBuilder::default());
    assert_eq!(build_query(&state).unwrap(), "SELECT * FROM PROD.PUBLIC.ORDERS");

    state.data_format = Some(DataFormat::TimeSeries);
    // default time series has no time column
    assert!(build_query(&state).is_err());
}

#[test]
fn try_build_query_falls_back_on_incomplete_state() {
    let state = SunflakeState::default();
    assert_eq!(try_build_query(&state, "-- incomplete"), "-- incomplete");
}

#[test]
fn synthesis_is_deterministic() {
    let mut time_series = TimeSeries::default();
    time_series.time_column = Some(TableColumn::new("TS", "TIMESTAMP_NTZ"));
    time_series.metrics = vec![metric("V", AggregateFunc::Sum)];

    let first = build_sql_for_time_series(&object(), &time_series).unwrap();
    let second = build_sql_for_time_series(&object(), &time_series).unwrap();
    assert_eq!(first, second);
}
