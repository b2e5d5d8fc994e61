//! # Storefront Config
//!
//! Configuration types loaded from environment variables.
//!
//! - [`database`]: PostgreSQL connection settings
//! - [`datagen`]: Defaults for generation runs (volume, output dir, seed)
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::{DatabaseConfig, DatagenConfig};
//!
//! let db = DatabaseConfig::from_env();
//! let datagen = DatagenConfig::from_env();
//! ```

pub mod database;
pub mod datagen;

// Re-export commonly used types at crate root
pub use database::DatabaseConfig;
pub use datagen::DatagenConfig;

/// Reads and parses an environment variable, returning `None` when the
/// variable is unset or does not parse.
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
