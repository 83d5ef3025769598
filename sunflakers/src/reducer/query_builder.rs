use crate::models::{QueryBuilder, SelectColumn};

use super::Action;

/// Tabular-builder reducer.
///
/// An absent sub-state stays absent through unmatched actions; the first
/// matched action materializes it from the defaults, mirroring how the
/// persisted JSON only grows this subtree once the user touches it.
pub(crate) fn reduce(state: Option<&QueryBuilder>, action: &Action) -> Option<QueryBuilder> {
    match action {
        // Object changes invalidate every column reference this subtree
        // holds, independently of the object-browser reducer's own reset.
        Action::SetDatabase(_) | Action::SetSchema(_) | Action::SetTable(_) => {
            let mut next = state.cloned().unwrap_or_default();
            next.select_columns = vec![SelectColumn::default()];
            next.where_json_tree = None;
            next.where_string = None;
            Some(next)
        }
        Action::SetHasFilter(has_filter) => {
            let mut next = state.cloned().unwrap_or_default();
            next.has_filter = *has_filter;
            Some(next)
        }
        Action::SetHasGroupBy(has_group_by) => {
            let mut next = state.cloned().unwrap_or_default();
            next.has_group_by = *has_group_by;
            Some(next)
        }
        Action::SetHasOrderBy(has_order_by) => {
            let mut next = state.cloned().unwrap_or_default();
            next.has_order_by = *has_order_by;
            Some(next)
        }
        Action::SetColumnField { index, column } => Some(edit_slot(state, *index, |slot| {
            slot.column = Some(column.clone());
        })),
        Action::SetColumnAggFunc { index, agg_func } => Some(edit_slot(state, *index, |slot| {
            // None deletes the field; the serialized entry then has no
            // aggFunc key at all.
            slot.agg_func = *agg_func;
        })),
        Action::SetColumnAlias { index, alias } => Some(edit_slot(state, *index, |slot| {
            slot.alias = Some(alias.clone());
        })),
        Action::DeleteColumn { index } => {
            let mut next = state.cloned().unwrap_or_default();
            if *index < next.select_columns.len() {
                next.select_columns.remove(*index);
            }
            Some(next)
        }
        Action::AddColumn => {
            let mut next = state.cloned().unwrap_or_default();
            next.select_columns.push(SelectColumn::default());
            Some(next)
        }
        Action::SetQueryWhere {
            where_json_tree,
            where_string,
        } => {
            let mut next = state.cloned().unwrap_or_default();
            next.where_json_tree = Some(where_json_tree.clone());
            next.where_string = Some(where_string.clone());
            Some(next)
        }
        Action::AddGroupBy => {
            let mut next = state.cloned().unwrap_or_default();
            next.group_by_columns.push(String::new());
            Some(next)
        }
        Action::DeleteGroupBy { index } => {
            let mut next = state.cloned().unwrap_or_default();
            if *index < next.group_by_columns.len() {
                next.group_by_columns.remove(*index);
            }
            Some(next)
        }
        Action::SetGroupBy { index, name } => {
            let mut next = state.cloned().unwrap_or_default();
            if let Some(slot) = next.group_by_columns.get_mut(*index) {
                *slot = name.clone();
            }
            Some(next)
        }
        Action::SetOrderByName(name) => Some(edit_order_by(state, |order_by| {
            order_by.name = Some(name.clone());
        })),
        Action::SetOrderBySortOrder(sort_order) => Some(edit_order_by(state, |order_by| {
            order_by.sort_order = Some(*sort_order);
        })),
        Action::SetOrderByLimit(limit) => Some(edit_order_by(state, |order_by| {
            order_by.limit = Some(*limit);
        })),
        _ => state.cloned(),
    }
}

fn edit_slot(
    state: Option<&QueryBuilder>,
    index: usize,
    edit: impl FnOnce(&mut SelectColumn),
) -> QueryBuilder {
    let mut next = state.cloned().unwrap_or_default();
    if let Some(slot) = next.select_columns.get_mut(index) {
        edit(slot);
    }
    next
}

fn edit_order_by(
    state: Option<&QueryBuilder>,
    edit: impl FnOnce(&mut crate::models::OrderByColumn),
) -> QueryBuilder {
    let mut next = state.cloned().unwrap_or_default();
    let mut order_by = next.order_by_column.take().unwrap_or_default();
    edit(&mut order_by);
    next.order_by_column = Some(order_by);
    next
}
