use crate::models::SnowflakeObject;

use super::Action;

/// Object-browser reducer. Selecting a coarser object clears every
/// finer-grained selection and its cached list, so a stale schema, table or
/// column can never survive a database change.
pub(crate) fn reduce(state: Option<&SnowflakeObject>, action: &Action) -> SnowflakeObject {
    let current = state.cloned().unwrap_or_default();

    match action {
        Action::SetDatabaseList(database_list) => SnowflakeObject {
            database_list: database_list.clone(),
            ..current
        },
        Action::SetDatabase(database) => SnowflakeObject {
            database: Some(database.clone()),
            schema_list: Vec::new(),
            schema: None,
            table_list: Vec::new(),
            table: None,
            column_list: Vec::new(),
            ..current
        },
        Action::SetSchemaList(schema_list) => SnowflakeObject {
            schema_list: schema_list.clone(),
            ..current
        },
        Action::SetSchema(schema) => SnowflakeObject {
            schema: Some(schema.clone()),
            table_list: Vec::new(),
            table: None,
            column_list: Vec::new(),
            ..current
        },
        Action::SetTableList(table_list) => SnowflakeObject {
            table_list: table_list.clone(),
            ..current
        },
        Action::SetTable(table) => SnowflakeObject {
            table: Some(table.clone()),
            column_list: Vec::new(),
            ..current
        },
        Action::SetColumnList(column_list) => SnowflakeObject {
            column_list: column_list.clone(),
            ..current
        },
        _ => current,
    }
}
