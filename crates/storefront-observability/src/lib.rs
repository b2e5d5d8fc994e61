//! Storefront Observability
//!
//! Console logging for the storefront binaries. Library crates only emit
//! `tracing` events; binaries call [`init_basic_console_logging`] once at
//! startup to install a subscriber.
//!
//! # Examples
//!
//! ```no_run
//! storefront_observability::init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{default_filter, init_basic_console_logging};
