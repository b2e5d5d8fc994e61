//! PostgreSQL sink.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Transaction};
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Instant;
use storefront_core::{DatagenError, password::SEED_HASH_COST};
use storefront_db::{quote_ident, truncate_tables};
use storefront_models::{FieldValue, GeneratedTables, SeedUser, TableResult, TableRow};
use tracing::{debug, info};

use super::{SinkReport, TableSink, TableWriteSummary};

/// PostgreSQL's limit on bind parameters in one statement.
pub const MAX_BIND_PARAMS: usize = 65_535;

const BATCH_SIZE: usize = 1_000;

const SEQUENCE_RESET_SQL: &str = "SELECT setval(pg_get_serial_sequence($1, $2), $3)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseSinkOptions {
    /// Truncate every written table, restarting identities, before inserting.
    pub reset: bool,
    /// Store bcrypt hashes instead of plain-text seed passwords.
    pub hash_passwords: bool,
    pub hash_cost: u32,
}

impl Default for DatabaseSinkOptions {
    fn default() -> Self {
        Self {
            reset: false,
            hash_passwords: false,
            hash_cost: SEED_HASH_COST,
        }
    }
}

/// Inserts tables into PostgreSQL.
///
/// All tables are written in one transaction, in collection order. After a
/// table with a primary key is inserted, its id sequence is moved to the
/// highest inserted key so later application inserts continue after it.
/// Any failure rolls the whole write back.
#[derive(Debug, Clone)]
pub struct DatabaseSink {
    pool: PgPool,
    options: DatabaseSinkOptions,
}

impl DatabaseSink {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            options: DatabaseSinkOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DatabaseSinkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> DatabaseSinkOptions {
        self.options
    }

    pub async fn write_all(&self, tables: &GeneratedTables) -> Result<SinkReport, DatagenError> {
        let mut tx = self.pool.begin().await?;

        if self.options.reset {
            let names: Vec<&str> = tables.names().collect();
            truncate_tables(&mut *tx, &names).await?;
        }

        let mut report = SinkReport::default();
        for table in tables {
            let start_time = Instant::now();
            let table = self.prepare(table)?;

            insert_rows(&mut tx, &table).await?;

            let sequence_reset = match table.sequence_reset() {
                Some((primary_key, max_key)) => {
                    reset_sequence(&mut tx, table.name, primary_key, max_key).await?;
                    Some(max_key)
                }
                None => None,
            };

            info!(
                table = table.name,
                rows = table.len(),
                sequence = ?sequence_reset,
                elapsed = ?start_time.elapsed(),
                "Inserted table"
            );

            report.tables.push(TableWriteSummary {
                name: table.name,
                rows: table.len(),
                sequence_reset,
                path: None,
            });
        }

        tx.commit().await?;
        Ok(report)
    }

    fn prepare<'a>(&self, table: &'a TableResult) -> Result<Cow<'a, TableResult>, DatagenError> {
        if self.options.hash_passwords && table.name == SeedUser::TABLE.name {
            Ok(Cow::Owned(hash_password_column(table, self.options.hash_cost)?))
        } else {
            Ok(Cow::Borrowed(table))
        }
    }
}

impl TableSink for DatabaseSink {
    async fn write(&mut self, tables: &GeneratedTables) -> Result<SinkReport, DatagenError> {
        self.write_all(tables).await
    }
}

/// Copy of `table` with its `password` cells replaced by bcrypt hashes.
/// Each distinct password is hashed once.
pub fn hash_password_column(table: &TableResult, cost: u32) -> Result<TableResult, DatagenError> {
    let mut hashed = table.clone();
    let Some(column) = table.field_index("password") else {
        return Ok(hashed);
    };

    let mut cache: HashMap<String, String> = HashMap::new();
    for row in &mut hashed.rows {
        if let Some(FieldValue::Text(plain)) = row.get_mut(column) {
            let hash = match cache.get(plain.as_str()) {
                Some(hash) => hash.clone(),
                None => {
                    let hash = storefront_core::hash_password(plain, cost)?;
                    cache.insert(plain.clone(), hash.clone());
                    hash
                }
            };
            *plain = hash;
        }
    }

    debug!(distinct = cache.len(), "Hashed seed passwords");
    Ok(hashed)
}

/// Rows per `INSERT` for a table with `field_count` columns, keeping each
/// statement under the bind parameter limit.
pub fn rows_per_statement(field_count: usize) -> usize {
    (MAX_BIND_PARAMS / field_count.max(1)).clamp(1, BATCH_SIZE)
}

/// Multi-row `INSERT` with positional parameters for `rows` rows.
pub fn insert_statement(table: &str, fields: &[&str], rows: usize) -> String {
    let columns = fields
        .iter()
        .map(|f| quote_ident(f))
        .collect::<Vec<_>>()
        .join(", ");

    let mut query = format!("INSERT INTO {} ({columns}) VALUES ", quote_ident(table));

    for row in 0..rows {
        if row > 0 {
            query.push_str(", ");
        }
        query.push('(');
        for col in 0..fields.len() {
            if col > 0 {
                query.push_str(", ");
            }
            query.push_str(&format!("${}", row * fields.len() + col + 1));
        }
        query.push(')');
    }

    query
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q FieldValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        FieldValue::Int(v) => query.bind(*v),
        FieldValue::Text(v) => query.bind(v.as_str()),
        FieldValue::Decimal(v) => query.bind(*v),
        FieldValue::Bool(v) => query.bind(*v),
    }
}

async fn insert_rows(
    tx: &mut Transaction<'_, Postgres>,
    table: &TableResult,
) -> Result<(), DatagenError> {
    let per_statement = rows_per_statement(table.fields.len());

    for chunk in table.rows.chunks(per_statement) {
        let sql = insert_statement(table.name, table.fields, chunk.len());
        debug!(table = table.name, rows = chunk.len(), "Inserting chunk");
        let mut query = sqlx::query(&sql);
        for value in chunk.iter().flatten() {
            query = bind_value(query, value);
        }
        query.execute(&mut **tx).await?;
    }

    Ok(())
}

async fn reset_sequence(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    primary_key: &str,
    max_key: i64,
) -> Result<(), DatagenError> {
    sqlx::query(SEQUENCE_RESET_SQL)
        .bind(table)
        .bind(primary_key)
        .bind(max_key)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_models::UserId;

    #[test]
    fn test_insert_statement() {
        assert_eq!(
            insert_statement("roles", &["role_id", "role_name"], 2),
            "INSERT INTO \"roles\" (\"role_id\", \"role_name\") VALUES ($1, $2), ($3, $4)"
        );
    }

    #[test]
    fn test_insert_statement_numbers_params_sequentially() {
        let sql = insert_statement("t", &["a", "b", "c"], 3);
        assert!(sql.ends_with("($7, $8, $9)"));
        assert!(!sql.contains("$10"));
    }

    #[test]
    fn test_rows_per_statement_respects_bind_limit() {
        for fields in 1..=12 {
            let rows = rows_per_statement(fields);
            assert!(rows >= 1);
            assert!(rows * fields <= MAX_BIND_PARAMS);
        }
        assert_eq!(rows_per_statement(0), BATCH_SIZE);
        assert_eq!(rows_per_statement(100_000), 1);
    }

    fn users_table() -> TableResult {
        let user = |id: i64, name: &str, password: &str| SeedUser {
            user_id: UserId::new(id),
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password: password.to_string(),
            admin: false,
        };
        TableResult::from_rows(&[
            user(1, "taz42", "Hunter2"),
            user(2, "xgod17", "Hunter2"),
            user(3, "shroud99", "Adm1n"),
        ])
    }

    #[test]
    fn test_hash_password_column() {
        let table = users_table();
        let hashed = hash_password_column(&table, SEED_HASH_COST).unwrap();
        let column = table.field_index("password").unwrap();

        for (plain_row, hashed_row) in table.rows.iter().zip(&hashed.rows) {
            let (FieldValue::Text(plain), FieldValue::Text(hash)) =
                (&plain_row[column], &hashed_row[column])
            else {
                panic!("password cells must be text");
            };
            assert_ne!(plain, hash);
            assert!(storefront_core::verify_password(plain, hash).unwrap());
        }

        // Same password, same hash.
        assert_eq!(hashed.rows[0][column], hashed.rows[1][column]);
        assert_eq!(hashed.rows[0][1], table.rows[0][1]);
    }

    #[test]
    fn test_hash_password_column_without_password_field() {
        let table = TableResult {
            name: "suppliers",
            fields: &["supplier_id", "name"],
            rows: vec![vec![FieldValue::Int(1), FieldValue::Text("Hunter2".into())]],
            primary_key: Some("supplier_id"),
            max_key: Some(1),
        };
        assert_eq!(hash_password_column(&table, SEED_HASH_COST).unwrap(), table);
    }

    #[test]
    fn test_default_options() {
        let options = DatabaseSinkOptions::default();
        assert!(!options.reset);
        assert!(!options.hash_passwords);
        assert_eq!(options.hash_cost, SEED_HASH_COST);
    }
}
