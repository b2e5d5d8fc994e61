//! Storefront seed data generation.
//!
//! Generation runs in two phases. [`build_tables`] produces every table in
//! foreign-key order from a single root RNG; a [`TableSink`] then persists
//! the result to CSV files or to PostgreSQL.
//!
//! # Example
//!
//! ```ignore
//! use storefront_cli::seeder::{generate, Destination, SeedConfig};
//!
//! let config = SeedConfig::new(10).with_seed(7);
//! let report = generate(&config, Destination::Files("data".into())).await?;
//! println!("{} rows written", report.total_rows());
//! ```

pub mod catalog;
pub mod models;
pub mod scalars;
pub mod sink;
pub mod staff;
pub mod stores;
pub mod users;

use rand::Rng;
use std::path::PathBuf;
use std::time::Instant;
use storefront_core::DatagenError;
use storefront_db::PgPool;
use storefront_models::{
    Employee, Employment, GeneratedTables, Inventory, Order, Product, Role, SeedUser, Store,
    Supplier, TableResult, TableRow, Transaction,
};
use tracing::info;

pub use models::{SeedConfig, TableVolumes, VolumeScale};
pub use sink::{
    DatabaseSink, DatabaseSinkOptions, FileSink, SinkReport, TableSink, TableWriteSummary,
};
pub use users::UsernameVocabulary;

/// Table names in generation order. Every table's foreign keys point only at
/// tables earlier in this list.
pub const TABLE_ORDER: [&str; 10] = [
    Role::TABLE.name,
    Employee::TABLE.name,
    Store::TABLE.name,
    Employment::TABLE.name,
    Product::TABLE.name,
    Inventory::TABLE.name,
    Transaction::TABLE.name,
    Supplier::TABLE.name,
    Order::TABLE.name,
    SeedUser::TABLE.name,
];

/// Where [`generate`] sends its tables.
#[derive(Debug, Clone)]
pub enum Destination {
    /// One CSV file per table in this directory.
    Files(PathBuf),
    Database {
        pool: PgPool,
        options: DatabaseSinkOptions,
    },
}

/// Builds every storefront table for `config`.
///
/// A count of zero yields every table with no rows.
pub fn build_tables<R: Rng>(
    config: &SeedConfig,
    rng: &mut R,
) -> Result<GeneratedTables, DatagenError> {
    build_tables_with(config, &UsernameVocabulary::default(), rng)
}

/// [`build_tables`] with a caller-supplied username vocabulary.
pub fn build_tables_with<R: Rng>(
    config: &SeedConfig,
    usernames: &UsernameVocabulary,
    rng: &mut R,
) -> Result<GeneratedTables, DatagenError> {
    let start_time = Instant::now();
    let volumes = config.volumes();
    info!(count = config.count, ?volumes, "Building storefront tables");

    let roles = staff::build_roles(volumes.roles);
    let employees = staff::build_employees(volumes.employees, &roles, rng)?;
    let stores = stores::build_stores(volumes.stores, rng);
    let employment = staff::build_employment(volumes.employment, &employees, &stores, rng)?;
    let products = catalog::build_products(volumes.products, rng);
    let inventory = catalog::build_inventory(volumes.inventory, &stores, &products, rng)?;
    let transactions =
        catalog::build_transactions(volumes.transactions, &stores, &products, rng)?;
    let suppliers = catalog::build_suppliers(volumes.suppliers);
    let orders = catalog::build_orders(volumes.orders, &stores, &products, &suppliers, rng)?;
    let users = users::build_users_from(volumes.users, usernames, rng)?;

    let mut tables = GeneratedTables::new();
    tables.push(TableResult::from_rows(&roles));
    tables.push(TableResult::from_rows(&employees));
    tables.push(TableResult::from_rows(&stores));
    tables.push(TableResult::from_rows(&employment));
    tables.push(TableResult::from_rows(&products));
    tables.push(TableResult::from_rows(&inventory));
    tables.push(TableResult::from_rows(&transactions));
    tables.push(TableResult::from_rows(&suppliers));
    tables.push(TableResult::from_rows(&orders));
    tables.push(TableResult::from_rows(&users));

    info!(
        tables = tables.len(),
        rows = tables.total_rows(),
        elapsed = ?start_time.elapsed(),
        "Built storefront tables"
    );
    Ok(tables)
}

/// Builds all tables for `config` and writes them to `destination`.
pub async fn generate(
    config: &SeedConfig,
    destination: Destination,
) -> Result<SinkReport, DatagenError> {
    let mut rng = config.rng();
    let tables = build_tables(config, &mut rng)?;

    match destination {
        Destination::Files(out_dir) => FileSink::new(out_dir).write(&tables).await,
        Destination::Database { pool, options } => {
            DatabaseSink::new(pool)
                .with_options(options)
                .write(&tables)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use storefront_models::FieldValue;

    fn build(count: usize, seed: u64) -> GeneratedTables {
        build_tables(&SeedConfig::new(count), &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn column(tables: &GeneratedTables, table: &str, field: &str) -> Vec<FieldValue> {
        let table = tables.get(table).unwrap();
        let index = table.field_index(field).unwrap();
        table.rows.iter().map(|row| row[index].clone()).collect()
    }

    #[test]
    fn test_tables_in_generation_order() {
        let tables = build(3, 1);
        assert_eq!(tables.names().collect::<Vec<_>>(), TABLE_ORDER);
    }

    #[test]
    fn test_volumes_for_count_ten() {
        let tables = build(10, 2);
        let len = |name: &str| tables.get(name).unwrap().len();

        assert_eq!(len("roles"), 5);
        assert_eq!(len("employees"), 100);
        assert_eq!(len("stores"), 10);
        assert_eq!(len("employment"), 120);
        assert_eq!(len("products"), 10);
        assert_eq!(len("inventory"), 100);
        assert_eq!(len("transactions"), 100);
        assert_eq!(len("suppliers"), 10);
        assert_eq!(len("orders"), 20);
        assert_eq!(len("users"), 10);
    }

    #[test]
    fn test_foreign_keys_resolve() {
        let tables = build(6, 3);
        let keys = |table: &str, field: &str| -> HashSet<FieldValue> {
            column(&tables, table, field).into_iter().collect()
        };

        let role_ids = keys("roles", "role_id");
        let employee_ids = keys("employees", "employee_id");
        let store_ids = keys("stores", "store_id");
        let product_ids = keys("products", "product_id");
        let supplier_ids = keys("suppliers", "supplier_id");

        assert!(keys("employees", "role_id").is_subset(&role_ids));
        assert!(keys("employment", "employee_id").is_subset(&employee_ids));
        assert_eq!(keys("employment", "store_id"), store_ids);
        assert!(keys("inventory", "store_id").is_subset(&store_ids));
        assert!(keys("inventory", "product_id").is_subset(&product_ids));
        assert!(keys("transactions", "product_id").is_subset(&product_ids));
        assert!(keys("orders", "supplier_id").is_subset(&supplier_ids));
    }

    #[test]
    fn test_primary_keys_sequential_and_max_key() {
        let tables = build(4, 4);
        for table in &tables {
            let Some(pk) = table.primary_key else {
                assert_eq!(table.max_key, None);
                continue;
            };
            let ids = column(&tables, table.name, pk);
            let expected: Vec<FieldValue> =
                (1..=table.len() as i64).map(FieldValue::Int).collect();
            assert_eq!(ids, expected, "{}", table.name);
            assert_eq!(table.max_key, Some(table.len() as i64));
        }
    }

    #[test]
    fn test_zero_count_builds_empty_tables() {
        let tables = build(0, 5);
        assert_eq!(tables.len(), TABLE_ORDER.len());
        assert_eq!(tables.total_rows(), 0);
        assert!(tables.iter().all(|t| t.sequence_reset().is_none()));
    }

    #[test]
    fn test_zero_employment_scale_still_staffs_every_store() {
        let config = SeedConfig::new(3).with_scale(VolumeScale {
            employment: 0,
            ..VolumeScale::default()
        });
        let tables = build_tables(&config, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(tables.get("employment").unwrap().len(), 3);
        let staffed: HashSet<FieldValue> =
            column(&tables, "employment", "store_id").into_iter().collect();
        let stores: HashSet<FieldValue> =
            column(&tables, "stores", "store_id").into_iter().collect();
        assert_eq!(staffed, stores);
    }

    #[test]
    fn test_default_vocabulary_covers_two_thousand_users() {
        let tables = build(2000, 10);
        let users = tables.get("users").unwrap();
        assert_eq!(users.len(), 2000);

        let names: HashSet<FieldValue> =
            column(&tables, "users", "username").into_iter().collect();
        assert_eq!(names.len(), 2000);
    }

    #[test]
    fn test_same_seed_same_tables() {
        assert_eq!(build(5, 42), build(5, 42));
        assert_ne!(build(5, 42), build(5, 43));
    }

    #[test]
    fn test_undersized_username_vocabulary_fails() {
        let vocabulary = UsernameVocabulary::new(["a", "b", "c"]);
        let err = build_tables_with(
            &SeedConfig::new(4),
            &vocabulary,
            &mut StdRng::seed_from_u64(6),
        )
        .unwrap_err();
        assert!(err.is_insufficient_unique_values());
    }

    #[tokio::test]
    async fn test_generate_to_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = SeedConfig::new(2).with_seed(8);

        let report = generate(&config, Destination::Files(dir.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(report.tables.len(), TABLE_ORDER.len());
        for name in TABLE_ORDER {
            assert!(dir.path().join(format!("{name}.csv")).is_file(), "{name}");
        }
        assert_eq!(report.get("employees").map(|t| t.rows), Some(20));
    }
}
