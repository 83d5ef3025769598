//! Query state model for the Sunflake editor.
//!
//! One `SunflakeState` tree holds everything a single query's editor can
//! change: top-level mode flags, the object-browser selection, the tabular
//! builder sub-state and the time-series sub-state. The tree is persisted as
//! camelCase JSON; optional fields that are absent are omitted on
//! serialization so that "explicitly cleared" and "never set" look the same
//! on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_ROW_LIMIT: u64 = 1_000_000;
pub const DEFAULT_ROW_LIMIT: u64 = 1000;

/// Shape of the rows the host should produce for this query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    TimeSeries,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Builder,
    Code,
}

/// Root editable state for one query.
///
/// In builder mode `query_text` is regenerated from the structured fields;
/// in code mode it is authoritative and the structured fields go stale until
/// the user switches back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SunflakeState {
    pub query_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_format: Option<DataFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_mode: Option<EditorMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_builder: Option<QueryBuilder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_series: Option<TimeSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snowflake_object: Option<SnowflakeObject>,
}

impl Default for SunflakeState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            data_format: Some(DataFormat::TimeSeries),
            editor_mode: Some(EditorMode::Builder),
            query_builder: None,
            time_series: Some(TimeSeries::default()),
            snowflake_object: None,
        }
    }
}

/// Cached object-browser lists plus the current selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnowflakeObject {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub database_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schema_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub table_list: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_list: Vec<TableColumn>,
}

/// A column as listed by `information_schema.columns`; `data_type` carries
/// the raw Snowflake type tag (`TIMESTAMP_NTZ`, `FLOAT`, `TEXT`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregateFunc {
    Avg,
    Count,
    Max,
    Min,
    Sum,
}

impl AggregateFunc {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunc::Avg => "AVG",
            AggregateFunc::Count => "COUNT",
            AggregateFunc::Max => "MAX",
            AggregateFunc::Min => "MIN",
            AggregateFunc::Sum => "SUM",
        }
    }
}

impl fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the tabular SELECT list. An entry without a column is an
/// empty slot the user has not filled in yet; it contributes nothing to the
/// generated SQL.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<TableColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agg_func: Option<AggregateFunc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderByColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Tabular-mode builder sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryBuilder {
    pub has_filter: bool,
    pub has_group_by: bool,
    pub has_order_by: bool,
    pub select_columns: Vec<SelectColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_json_tree: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_string: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_by_columns: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_column: Option<OrderByColumn>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self {
            has_filter: false,
            has_group_by: false,
            has_order_by: false,
            // one empty slot so the editor always shows a row to fill in
            select_columns: vec![SelectColumn::default()],
            where_json_tree: None,
            where_string: None,
            group_by_columns: Vec::new(),
            order_by_column: None,
        }
    }
}

/// Grafana time-bucketing units as accepted by `$__timeGroup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "y")]
    Year,
    #[serde(rename = "M")]
    Month,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "m")]
    Minute,
    #[serde(rename = "s")]
    Second,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Year => "y",
            TimeUnit::Month => "M",
            TimeUnit::Week => "w",
            TimeUnit::Day => "d",
            TimeUnit::Hour => "h",
            TimeUnit::Minute => "m",
            TimeUnit::Second => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gap-fill policy passed through verbatim as the third `$__timeGroup`
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMissing {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "null")]
    Null,
    #[serde(rename = "previous")]
    Previous,
}

impl FillMissing {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMissing::Zero => "0",
            FillMissing::Null => "null",
            FillMissing::Previous => "previous",
        }
    }
}

impl fmt::Display for FillMissing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One projected metric of a time-series query. The aggregate is mandatory;
/// a slot without a column is dropped at synthesis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricColumn {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<TableColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub agg_func: AggregateFunc,
}

impl Default for MetricColumn {
    fn default() -> Self {
        Self {
            column: None,
            alias: None,
            agg_func: AggregateFunc::Max,
        }
    }
}

/// Time-series-mode builder sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_column: Option<TableColumn>,
    pub interval: u32,
    pub time_unit: TimeUnit,
    pub fill_missing: FillMissing,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub line_identifiers: Vec<String>,
    pub metrics: Vec<MetricColumn>,
    pub row_limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_json_tree: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_string: Option<String>,
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self {
            time_column: None,
            interval: 1,
            time_unit: TimeUnit::Minute,
            fill_missing: FillMissing::Zero,
            line_identifiers: Vec::new(),
            metrics: vec![MetricColumn::default()],
            row_limit: DEFAULT_ROW_LIMIT,
            filter_json_tree: None,
            filter_string: None,
        }
    }
}
