use crate::models::{MetricColumn, TimeSeries};

use super::Action;

/// Time-series reducer.
///
/// Object changes reset this entire subtree to its defaults rather than
/// clearing individual fields: both the time axis and the metrics refer to
/// columns of the previously selected table, so nothing here survives.
pub(crate) fn reduce(state: Option<&TimeSeries>, action: &Action) -> TimeSeries {
    let mut next = state.cloned().unwrap_or_default();

    match action {
        Action::SetDatabase(_) | Action::SetSchema(_) | Action::SetTable(_) => {
            TimeSeries::default()
        }
        Action::SetTimeColumn(column) => {
            next.time_column = Some(column.clone());
            next
        }
        Action::SetTimeInterval(interval) => {
            next.interval = *interval;
            next
        }
        Action::SetTimeUnit(time_unit) => {
            next.time_unit = *time_unit;
            next
        }
        Action::SetFillMissing(fill_missing) => {
            next.fill_missing = *fill_missing;
            next
        }
        Action::AddLineIdentifier => {
            next.line_identifiers.push(String::new());
            next
        }
        Action::DeleteLineIdentifier { index } => {
            if *index < next.line_identifiers.len() {
                next.line_identifiers.remove(*index);
            }
            next
        }
        Action::SetLineIdentifier { index, name } => {
            if let Some(slot) = next.line_identifiers.get_mut(*index) {
                *slot = name.clone();
            }
            next
        }
        Action::SetMetricColumn { index, column } => {
            if let Some(metric) = next.metrics.get_mut(*index) {
                metric.column = Some(column.clone());
            }
            next
        }
        Action::SetMetricAggFunc { index, agg_func } => {
            if let Some(metric) = next.metrics.get_mut(*index) {
                metric.agg_func = *agg_func;
            }
            next
        }
        Action::SetMetricAlias { index, alias } => {
            if let Some(metric) = next.metrics.get_mut(*index) {
                metric.alias = Some(alias.clone());
            }
            next
        }
        Action::DeleteMetric { index } => {
            if *index < next.metrics.len() {
                next.metrics.remove(*index);
            }
            next
        }
        Action::AddMetric => {
            next.metrics.push(MetricColumn::default());
            next
        }
        Action::SetFilterColumns {
            filter_json_tree,
            filter_string,
        } => {
            next.filter_json_tree = Some(filter_json_tree.clone());
            next.filter_string = Some(filter_string.clone());
            next
        }
        Action::SetLimitRows(row_limit) => {
            next.row_limit = *row_limit;
            next
        }
        _ => next,
    }
}
