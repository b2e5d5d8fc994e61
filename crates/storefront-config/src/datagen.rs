//! Defaults for data generation runs.
//!
//! # Environment Variables
//!
//! - `DATAGEN_COUNT`: Base volume `n` that every table scales from (default: 20)
//! - `DATAGEN_OUT_DIR`: Directory the file sink writes into (default: `data`)
//! - `DATAGEN_SEED`: Optional RNG seed for reproducible runs
//!
//! Command-line flags take precedence over these values.

use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatagenConfig {
    pub count: i64,
    pub out_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            count: 20,
            out_dir: PathBuf::from("data"),
            seed: None,
        }
    }
}

impl DatagenConfig {
    /// Creates a new `DatagenConfig` from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            count: crate::env_parse("DATAGEN_COUNT").unwrap_or(defaults.count),
            out_dir: std::env::var("DATAGEN_OUT_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            seed: crate::env_parse("DATAGEN_SEED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatagenConfig::default();
        assert_eq!(config.count, 20);
        assert_eq!(config.out_dir, PathBuf::from("data"));
        assert_eq!(config.seed, None);
    }
}
