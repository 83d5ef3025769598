//! Editor context: one struct owning the state tree, the dispatch entry
//! point, the metadata collaborator and the four fetch slots. Threaded
//! explicitly through callers instead of living in ambient/global storage.

use std::sync::Arc;

use crate::build_query::{build_query, try_build_query};
use crate::error::Result;
use crate::fetch::{FetchSlot, FetchState};
use crate::metadata::MetadataProvider;
use crate::models::{SunflakeState, TableColumn};
use crate::reducer::{reduce, Action};

pub struct SunflakeEditor {
    state: SunflakeState,
    metadata: Arc<dyn MetadataProvider>,
    databases: FetchSlot<Vec<String>>,
    schemas: FetchSlot<Vec<String>>,
    tables: FetchSlot<Vec<String>>,
    columns: FetchSlot<Vec<TableColumn>>,
}

impl SunflakeEditor {
    pub fn new(metadata: Arc<dyn MetadataProvider>) -> Self {
        Self::with_state(SunflakeState::default(), metadata)
    }

    /// Resume editing a persisted query.
    pub fn with_state(state: SunflakeState, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            state,
            metadata,
            databases: FetchSlot::new("databases"),
            // dependent listings wait for their parent to be deliberately set
            schemas: FetchSlot::deferred("schemas"),
            tables: FetchSlot::deferred("tables"),
            columns: FetchSlot::deferred("columns"),
        }
    }

    pub fn state(&self) -> &SunflakeState {
        &self.state
    }

    /// Single dispatch entry point; actions are applied in call order, each
    /// seeing the result of the previous.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, &action);
    }

    /// Compile the current state for display, falling back to
    /// `query_on_error` while the state is incomplete.
    pub fn preview_sql(&self, query_on_error: &str) -> String {
        try_build_query(&self.state, query_on_error)
    }

    /// Compile the current state and store it as the query text. Unlike the
    /// preview, incomplete state surfaces as an error here.
    pub fn commit_query(&mut self) -> Result<String> {
        let sql = build_query(&self.state)?;
        self.dispatch(Action::SetQueryText(sql.clone()));
        Ok(sql)
    }

    pub fn databases(&self) -> &FetchState<Vec<String>> {
        self.databases.state()
    }

    pub fn schemas(&self) -> &FetchState<Vec<String>> {
        self.schemas.state()
    }

    pub fn tables(&self) -> &FetchState<Vec<String>> {
        self.tables.state()
    }

    pub fn columns(&self) -> &FetchState<Vec<TableColumn>> {
        self.columns.state()
    }

    /// Run any metadata listing whose dependencies changed since the last
    /// call, dispatching list-set actions for results that are still
    /// current. Fetch failures stay in the slot's error field; they are not
    /// retried and do not fail the sync.
    pub async fn sync_metadata(&mut self) {
        if let Some(token) = self.databases.observe(&[]) {
            let result = self
                .metadata
                .list_databases(None)
                .await
                .map_err(|e| e.to_string());
            if let Some(list) = self.databases.complete(token, result) {
                let list = list.clone();
                self.dispatch(Action::SetDatabaseList(list));
            }
        }

        let (database, schema, table) = self.selection();

        if let Some(token) = self.schemas.observe(&[&database]) {
            let result = self
                .metadata
                .list_schemas(&database, None)
                .await
                .map_err(|e| e.to_string());
            if let Some(list) = self.schemas.complete(token, result) {
                let list = list.clone();
                self.dispatch(Action::SetSchemaList(list));
            }
        }

        if let Some(token) = self.tables.observe(&[&database, &schema]) {
            let result = self
                .metadata
                .list_tables(&database, &schema, None)
                .await
                .map_err(|e| e.to_string());
            if let Some(list) = self.tables.complete(token, result) {
                let list = list.clone();
                self.dispatch(Action::SetTableList(list));
            }
        }

        if let Some(token) = self.columns.observe(&[&database, &schema, &table]) {
            let result = self
                .metadata
                .list_columns(&database, &schema, &table, None)
                .await
                .map_err(|e| e.to_string());
            if let Some(list) = self.columns.complete(token, result) {
                let list = list.clone();
                self.dispatch(Action::SetColumnList(list));
            }
        }
    }

    fn selection(&self) -> (String, String, String) {
        let object = self.state.snowflake_object.clone().unwrap_or_default();
        (
            object.database.unwrap_or_default(),
            object.schema.unwrap_or_default(),
            object.table.unwrap_or_default(),
        )
    }
}
