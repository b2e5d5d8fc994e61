//! Destinations for generated tables.
//!
//! A sink receives the full [`GeneratedTables`] collection and persists it.
//! Two sinks exist: [`FileSink`] writes one CSV file per table and
//! [`DatabaseSink`] inserts into PostgreSQL inside a single transaction.

mod database;
mod file;

pub use database::{
    DatabaseSink, DatabaseSinkOptions, MAX_BIND_PARAMS, hash_password_column, insert_statement,
    rows_per_statement,
};
pub use file::FileSink;

use std::path::PathBuf;
use storefront_core::DatagenError;
use storefront_models::GeneratedTables;

/// Something that can persist a set of generated tables.
#[allow(async_fn_in_trait)]
pub trait TableSink {
    async fn write(&mut self, tables: &GeneratedTables) -> Result<SinkReport, DatagenError>;
}

/// What a sink did with one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWriteSummary {
    pub name: &'static str,
    pub rows: usize,
    /// Value the table's id sequence was moved to, if any.
    pub sequence_reset: Option<i64>,
    /// File written, for file sinks.
    pub path: Option<PathBuf>,
}

/// Outcome of a sink write, one summary per table in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinkReport {
    pub tables: Vec<TableWriteSummary>,
}

impl SinkReport {
    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn get(&self, name: &str) -> Option<&TableWriteSummary> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn sequences_reset(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| t.sequence_reset.is_some())
            .count()
    }
}
