//! # Storefront Models
//!
//! Row records for every table in the storefront schema, together with the
//! canonical table specs (name, field order, primary key) that sinks use to
//! lay out files and `INSERT` statements.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed sequential ids
//! - [`table`]: [`TableRow`], [`FieldValue`], [`TableResult`], [`GeneratedTables`]
//! - [`staff`]: Roles, employees and store employment
//! - [`stores`]: Store locations
//! - [`catalog`]: Products, inventory, transactions, suppliers and orders
//! - [`users`]: Seed user accounts
//!
//! # Example
//!
//! ```ignore
//! use storefront_models::{Role, RoleId, RoleName, TableResult};
//!
//! let roles = vec![Role { role_id: RoleId::new(1), role_name: RoleName::Cashier }];
//! let table = TableResult::from_rows(&roles);
//! assert_eq!(table.fields, &["role_id", "role_name"]);
//! ```

pub mod catalog;
pub mod ids;
pub mod staff;
pub mod stores;
pub mod table;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Inventory, Order, Product, Supplier, Transaction};
pub use ids::{
    EmployeeId, OrderId, ProductId, RoleId, StoreId, SupplierId, TransactionId, UserId,
};
pub use staff::{Employee, Employment, Role, RoleName};
pub use stores::Store;
pub use table::{FieldValue, GeneratedTables, TableResult, TableRow, TableSpec};
pub use users::SeedUser;
