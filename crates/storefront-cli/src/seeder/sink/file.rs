//! CSV file sink.

use std::fs;
use std::path::{Path, PathBuf};
use storefront_core::DatagenError;
use storefront_models::{GeneratedTables, TableResult};
use tracing::{debug, info};

use super::{SinkReport, TableSink, TableWriteSummary};

/// Writes each table to `<out_dir>/<table>.csv`.
///
/// The header row lists the table's fields in canonical order. Cells are
/// quoted only when needed. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct FileSink {
    out_dir: PathBuf,
}

impl FileSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn path_for(&self, table: &str) -> PathBuf {
        self.out_dir.join(format!("{table}.csv"))
    }

    /// Creates the output directory if needed.
    pub fn ensure_out_dir(&self) -> Result<(), DatagenError> {
        if self.out_dir.exists() && !self.out_dir.is_dir() {
            return Err(DatagenError::NotADirectory(self.out_dir.clone()));
        }
        fs::create_dir_all(&self.out_dir)?;
        Ok(())
    }

    pub fn write_table(&self, table: &TableResult) -> Result<PathBuf, DatagenError> {
        let path = self.path_for(table.name);
        let mut writer = csv::Writer::from_path(&path)?;

        writer.write_record(table.fields)?;
        for row in &table.rows {
            writer.write_record(row.iter().map(ToString::to_string))?;
        }
        writer.flush()?;

        debug!(table = table.name, rows = table.len(), path = %path.display(), "Wrote CSV");
        Ok(path)
    }

    /// Synchronous body of [`TableSink::write`].
    pub fn write_all(&self, tables: &GeneratedTables) -> Result<SinkReport, DatagenError> {
        self.ensure_out_dir()?;

        let mut report = SinkReport::default();
        for table in tables {
            let path = self.write_table(table)?;
            report.tables.push(TableWriteSummary {
                name: table.name,
                rows: table.len(),
                sequence_reset: None,
                path: Some(path),
            });
        }

        info!(
            tables = report.tables.len(),
            rows = report.total_rows(),
            out_dir = %self.out_dir.display(),
            "Wrote CSV files"
        );
        Ok(report)
    }
}

impl TableSink for FileSink {
    async fn write(&mut self, tables: &GeneratedTables) -> Result<SinkReport, DatagenError> {
        self.write_all(tables)
    }
}
