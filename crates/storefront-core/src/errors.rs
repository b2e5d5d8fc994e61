//! Error taxonomy for data generation and persistence.
//!
//! A non-positive volume is not an error: builders simply return empty row
//! sets. Everything else that can go wrong during a run is one of the
//! variants below and is propagated unchanged to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building tables or writing them to a sink.
#[derive(Error, Debug)]
pub enum DatagenError {
    /// A builder enforcing uniqueness ran out of attempts before it could
    /// produce the requested number of distinct values.
    #[error(
        "insufficient unique values for {table}.{field}: requested {requested}, found {produced} after {attempts} attempts"
    )]
    InsufficientUniqueValues {
        table: &'static str,
        field: &'static str,
        requested: usize,
        produced: usize,
        attempts: usize,
    },

    /// A downstream builder was called with an empty upstream row set.
    #[error("cannot build {table}: upstream table {dependency} is empty")]
    Precondition {
        table: &'static str,
        dependency: &'static str,
    },

    /// The file sink output path exists but is not a directory.
    #[error("path {0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing error.
    #[error("failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl DatagenError {
    pub fn precondition(table: &'static str, dependency: &'static str) -> Self {
        Self::Precondition { table, dependency }
    }

    /// Returns true for the vocabulary-exhaustion condition.
    pub fn is_insufficient_unique_values(&self) -> bool {
        matches!(self, Self::InsufficientUniqueValues { .. })
    }
}
