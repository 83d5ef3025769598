//! Pure state transition machinery for the editor.
//!
//! `reduce` is total: every action yields a state, unknown-to-a-slice
//! actions leave that slice untouched, and the input state is never
//! mutated. Four sub-reducers run over disjoint slices of the tree on
//! every dispatch and their results are merged into one new state.

use crate::models::SunflakeState;

mod action;
mod query_builder;
mod snowflake;
mod time_series;
mod top;

pub use action::Action;

pub fn reduce(state: &SunflakeState, action: &Action) -> SunflakeState {
    tracing::debug!(?action, "dispatch");

    let top = top::reduce(
        top::TopState {
            query_text: state.query_text.clone(),
            data_format: state.data_format,
            editor_mode: state.editor_mode,
        },
        action,
    );

    SunflakeState {
        query_text: top.query_text,
        data_format: top.data_format,
        editor_mode: top.editor_mode,
        query_builder: query_builder::reduce(state.query_builder.as_ref(), action),
        time_series: Some(time_series::reduce(state.time_series.as_ref(), action)),
        snowflake_object: Some(snowflake::reduce(state.snowflake_object.as_ref(), action)),
    }
}
