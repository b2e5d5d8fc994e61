//! # Storefront CLI
//!
//! Seed data generation for the storefront database.
//!
//! This library crate provides the generator used by the `storefront-cli`
//! binary and by the web layer's setup command.
//!
//! ## Usage
//!
//! ```ignore
//! use storefront_cli::seeder::{generate, Destination, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_seed(42);
//! generate(&config, Destination::Files("data".into())).await?;
//! ```

pub mod seeder;
