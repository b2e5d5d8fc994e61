//! # Storefront Core
//!
//! Core types shared by every storefront crate.
//!
//! - [`errors`]: The [`DatagenError`] taxonomy returned by builders and sinks
//! - [`password`]: bcrypt hashing for seeded user credentials
//!
//! # Example
//!
//! ```ignore
//! use storefront_core::{DatagenError, hash_password};
//!
//! let hash = hash_password("Hunter2", 4)?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::DatagenError;
pub use password::{hash_password, verify_password};
