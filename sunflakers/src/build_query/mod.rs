//! SQL synthesis from editor state.
//!
//! Two pure compilers, one per query shape, selected by `data_format`.
//! Both return `Result`; `try_build_query` is the single fallback wrapper
//! the live preview uses so the editor never breaks on incomplete state.

use crate::error::Result;
use crate::models::{DataFormat, SnowflakeObject, SunflakeState};

mod query_builder;
mod time_series;

pub use query_builder::build_sql_for_query_builder;
pub use time_series::build_sql_for_time_series;

pub fn build_query(state: &SunflakeState) -> Result<String> {
    let object = state.snowflake_object.clone().unwrap_or_default();
    match state.data_format.unwrap_or_default() {
        DataFormat::TimeSeries => {
            let time_series = state.time_series.clone().unwrap_or_default();
            build_sql_for_time_series(&object, &time_series)
        }
        DataFormat::Table => {
            let builder = state.query_builder.clone().unwrap_or_default();
            build_sql_for_query_builder(&object, &builder)
        }
    }
}

/// Compile, substituting `query_on_error` when the state is not yet
/// compilable.
pub fn try_build_query(state: &SunflakeState, query_on_error: &str) -> String {
    build_query(state).unwrap_or_else(|_| query_on_error.to_string())
}

/// ` FROM db.schema.table`, or nothing at all while no table is selected.
pub(crate) fn from_clause(object: &SnowflakeObject) -> String {
    match object.table.as_deref().filter(|table| !table.is_empty()) {
        Some(table) => format!(
            " FROM {}.{}.{}",
            object.database.as_deref().unwrap_or_default(),
            object.schema.as_deref().unwrap_or_default(),
            table
        ),
        None => String::new(),
    }
}
