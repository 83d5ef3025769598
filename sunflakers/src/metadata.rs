//! Snowflake metadata listings.
//!
//! `MetadataProvider` is the capability the editor consumes; the concrete
//! `MetadataClient` composes the listing SQL and hands it to a `SqlRunner`,
//! which in the plugin is the host's backend query path. Listings with blank
//! parent identifiers resolve to empty lists without touching the runner.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::TableColumn;

/// Executes a SQL statement through the host and returns the rows as JSON
/// objects keyed by column name.
#[async_trait]
pub trait SqlRunner: Send + Sync {
    async fn run_sql(&self, sql: &str, ref_id: &str) -> Result<Vec<Map<String, Value>>>;
}

/// The four asynchronous metadata listings the editor depends on.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    async fn list_databases(&self, search_word: Option<&str>) -> Result<Vec<String>>;
    async fn list_schemas(&self, database: &str, search_word: Option<&str>)
        -> Result<Vec<String>>;
    async fn list_tables(
        &self,
        database: &str,
        schema: &str,
        search_word: Option<&str>,
    ) -> Result<Vec<String>>;
    async fn list_columns(
        &self,
        database: &str,
        schema: &str,
        table: &str,
        search_word: Option<&str>,
    ) -> Result<Vec<TableColumn>>;
}

pub struct MetadataClient<R> {
    runner: R,
}

impl<R> MetadataClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner_ref(&self) -> &R {
        &self.runner
    }
}

impl<R: SqlRunner> MetadataClient<R> {
    async fn strings_from(&self, sql: &str, ref_id: &str, column: &str) -> Result<Vec<String>> {
        let rows = self.runner.run_sql(sql, ref_id).await?;
        let names: Vec<String> = rows
            .iter()
            .filter_map(|row| row.get(column).and_then(Value::as_str))
            .map(str::to_string)
            .collect();
        tracing::debug!(ref_id, rows = names.len(), "metadata listing");
        Ok(names)
    }
}

fn trimmed(search_word: Option<&str>) -> Option<&str> {
    search_word.map(str::trim).filter(|word| !word.is_empty())
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[async_trait]
impl<R: SqlRunner> MetadataProvider for MetadataClient<R> {
    async fn list_databases(&self, search_word: Option<&str>) -> Result<Vec<String>> {
        let sql = match trimmed(search_word) {
            Some(word) => format!("SHOW DATABASES LIKE '%{word}%'"),
            None => "SHOW DATABASES".to_string(),
        };
        self.strings_from(&sql, "databases", "name").await
    }

    async fn list_schemas(
        &self,
        database: &str,
        search_word: Option<&str>,
    ) -> Result<Vec<String>> {
        if blank(database) {
            return Ok(Vec::new());
        }
        let mut sql = format!("SHOW SCHEMAS IN DATABASE {database}");
        if let Some(word) = trimmed(search_word) {
            sql.push_str(&format!(" LIKE '%{word}%'"));
        }
        self.strings_from(&sql, "schemas", "name").await
    }

    async fn list_tables(
        &self,
        database: &str,
        schema: &str,
        search_word: Option<&str>,
    ) -> Result<Vec<String>> {
        if blank(database) || blank(schema) {
            return Ok(Vec::new());
        }
        let mut sql = format!(
            "SELECT table_name FROM {}.information_schema.tables \
             WHERE table_schema = '{schema}'",
            database.to_lowercase()
        );
        if let Some(word) = trimmed(search_word) {
            sql.push_str(&format!(" AND table_name LIKE '%{word}%'"));
        }
        sql.push_str(" ORDER BY table_name");
        // Snowflake returns the projected column uppercased here.
        self.strings_from(&sql, "tables", "TABLE_NAME").await
    }

    async fn list_columns(
        &self,
        database: &str,
        schema: &str,
        table: &str,
        search_word: Option<&str>,
    ) -> Result<Vec<TableColumn>> {
        if blank(database) || blank(schema) || blank(table) {
            return Ok(Vec::new());
        }
        let mut sql = format!(
            "SELECT column_name AS \"name\", data_type AS \"type\" \
             FROM {}.information_schema.columns \
             WHERE table_schema = '{schema}' AND table_name = '{table}'",
            database.to_lowercase()
        );
        if let Some(word) = trimmed(search_word) {
            sql.push_str(&format!(" AND column_name LIKE '%{word}%'"));
        }
        sql.push_str(" ORDER BY column_name");

        let rows = self.runner.run_sql(&sql, "columns").await?;
        let columns: Vec<TableColumn> = rows
            .into_iter()
            .filter_map(|row| serde_json::from_value(Value::Object(row)).ok())
            .collect();
        tracing::debug!(rows = columns.len(), "column listing");
        Ok(columns)
    }
}
