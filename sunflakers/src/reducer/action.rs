use serde_json::Value;

use crate::models::{
    AggregateFunc, DataFormat, EditorMode, FillMissing, SortOrder, TableColumn, TimeUnit,
};

/// Every state transition the editor can request.
///
/// All four sub-reducers receive every action and no-op on the variants
/// outside their slice; some variants (`SetDatabase`, `SetSchema`,
/// `SetTable`) are deliberately handled by more than one sub-reducer to
/// enforce cascade invalidation across slices.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // top level
    SetDataFormat(DataFormat),
    SetEditorMode(EditorMode),
    SetQueryText(String),
    /// Observed by the host; no state change.
    RunQuery,

    // object browser
    SetDatabaseList(Vec<String>),
    SetDatabase(String),
    SetSchemaList(Vec<String>),
    SetSchema(String),
    SetTableList(Vec<String>),
    SetTable(String),
    SetColumnList(Vec<TableColumn>),

    // query builder: toggles
    SetHasFilter(bool),
    SetHasGroupBy(bool),
    SetHasOrderBy(bool),

    // query builder: select clause
    SetColumnField { index: usize, column: TableColumn },
    /// `None` clears the aggregate entirely; the field is removed, not set
    /// to an empty marker.
    SetColumnAggFunc { index: usize, agg_func: Option<AggregateFunc> },
    SetColumnAlias { index: usize, alias: String },
    DeleteColumn { index: usize },
    AddColumn,

    // query builder: where clause
    SetQueryWhere { where_json_tree: Value, where_string: String },

    // query builder: group by clause
    AddGroupBy,
    DeleteGroupBy { index: usize },
    SetGroupBy { index: usize, name: String },

    // query builder: order by clause
    SetOrderByName(String),
    SetOrderBySortOrder(SortOrder),
    SetOrderByLimit(u64),

    // time series: time axis
    SetTimeColumn(TableColumn),
    SetTimeInterval(u32),
    SetTimeUnit(TimeUnit),
    SetFillMissing(FillMissing),

    // time series: line identifiers
    AddLineIdentifier,
    DeleteLineIdentifier { index: usize },
    SetLineIdentifier { index: usize, name: String },

    // time series: metrics
    SetMetricColumn { index: usize, column: TableColumn },
    SetMetricAggFunc { index: usize, agg_func: AggregateFunc },
    SetMetricAlias { index: usize, alias: String },
    DeleteMetric { index: usize },
    AddMetric,

    // time series: filter columns
    SetFilterColumns { filter_json_tree: Value, filter_string: String },

    // time series: limit rows
    SetLimitRows(u64),
}
