//! # Storefront
//!
//! Synthetic data for a retail storefront database: stores, staff, products,
//! inventory, sales and supplier orders, plus seed login accounts for the web
//! layer.
//!
//! ## Overview
//!
//! Generation is built from three layers:
//!
//! - **Scalar producers**: lazy, infinite streams of names, addresses, phone
//!   numbers, bounded decimals and booleans
//! - **Entity builders**: one per table, threading foreign keys from the rows
//!   built before them
//! - **Sinks**: CSV files, or PostgreSQL with id sequences moved past the
//!   inserted keys
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── storefront-core/           # DatagenError, password hashing
//! ├── storefront-config/         # Environment-driven configuration
//! ├── storefront-models/         # Row types, ids, table collection
//! ├── storefront-db/             # Pool, migrations, truncation
//! ├── storefront-observability/  # Console logging
//! └── storefront-cli/            # Generator, sinks and the CLI binary
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Write CSV files for count = 10 into ./data
//! cargo run -p storefront-cli -- generate --count 10 --seed 1
//!
//! # Create the schema and seed the database at DATABASE_URL
//! cargo run -p storefront-cli -- init-db --count 20
//! ```

pub use storefront_cli::seeder;
pub use storefront_config::{DatabaseConfig, DatagenConfig};
pub use storefront_core::{DatagenError, hash_password, verify_password};
pub use storefront_db as db;
pub use storefront_models as models;
pub use storefront_observability as observability;
