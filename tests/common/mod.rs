use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use storefront::models::GeneratedTables;
use storefront::seeder::{SeedConfig, build_tables};

/// Builds all tables for `count` from a fixed seed.
#[allow(dead_code)]
pub fn build(count: usize, seed: u64) -> GeneratedTables {
    build_tables(&SeedConfig::new(count), &mut StdRng::seed_from_u64(seed)).unwrap()
}

/// Reads a CSV file into its header and records.
#[allow(dead_code)]
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().iter().map(String::from).collect();
    let records = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    (headers, records)
}

/// Row count of `table`.
#[allow(dead_code)]
pub async fn count_rows(pool: &sqlx::PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM \"{table}\""))
        .fetch_one(pool)
        .await
        .unwrap()
}
