pub mod build_query;
pub mod column_type;
pub mod config;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod models;
pub mod reducer;

pub use build_query::{
    build_query, build_sql_for_query_builder, build_sql_for_time_series, try_build_query,
};
pub use column_type::{classify, ColumnClass};
pub use config::{ConnectionPoolOptions, SunflakeOptions};
pub use editor::SunflakeEditor;
pub use error::{Result, SunflakeError};
pub use fetch::{FetchSlot, FetchState, RequestToken};
pub use metadata::{MetadataClient, MetadataProvider, SqlRunner};
pub use models::{DataFormat, EditorMode, SunflakeState, TableColumn};
pub use reducer::{reduce, Action};
