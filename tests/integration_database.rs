mod common;

use common::{build, count_rows};
use sqlx::PgPool;
use storefront::seeder::{
    DatabaseSink, DatabaseSinkOptions, Destination, SeedConfig, TABLE_ORDER, generate,
};
use storefront::verify_password;

fn reset_options() -> DatabaseSinkOptions {
    DatabaseSinkOptions {
        reset: true,
        ..DatabaseSinkOptions::default()
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_write_inserts_every_table(pool: PgPool) {
    let tables = build(5, 1);
    let report = DatabaseSink::new(pool.clone())
        .write_all(&tables)
        .await
        .unwrap();

    for table in &tables {
        assert_eq!(count_rows(&pool, table.name).await, table.len() as i64);
    }
    assert_eq!(report.total_rows(), tables.total_rows());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_sequences_continue_after_inserted_keys(pool: PgPool) {
    let config = SeedConfig::new(3).with_seed(2);
    let report = generate(
        &config,
        Destination::Database {
            pool: pool.clone(),
            options: reset_options(),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.get("stores").unwrap().sequence_reset, Some(3));
    assert_eq!(report.get("employment").unwrap().sequence_reset, None);

    let store_id: i64 = sqlx::query_scalar(
        "INSERT INTO stores (address, city, state, zip, phone) \
         VALUES ('1 Main Street', 'Tampa', 'Florida', '33601', '813-555-0100') \
         RETURNING store_id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(store_id, 4);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_reset_makes_reruns_repeatable(pool: PgPool) {
    let sink = DatabaseSink::new(pool.clone()).with_options(reset_options());

    sink.write_all(&build(4, 3)).await.unwrap();
    sink.write_all(&build(2, 4)).await.unwrap();

    assert_eq!(count_rows(&pool, "stores").await, 2);
    assert_eq!(count_rows(&pool, "employees").await, 20);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_failed_write_rolls_back(pool: PgPool) {
    let sink = DatabaseSink::new(pool.clone());
    sink.write_all(&build(2, 5)).await.unwrap();

    // Same keys again without a reset: the first insert conflicts.
    assert!(sink.write_all(&build(3, 6)).await.is_err());

    for table in TABLE_ORDER {
        let expected = build(2, 5).get(table).unwrap().len() as i64;
        assert_eq!(count_rows(&pool, table).await, expected, "{table}");
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_hash_passwords_option(pool: PgPool) {
    let tables = build(3, 7);
    let options = DatabaseSinkOptions {
        hash_passwords: true,
        ..reset_options()
    };
    DatabaseSink::new(pool.clone())
        .with_options(options)
        .write_all(&tables)
        .await
        .unwrap();

    let users = tables.get("users").unwrap();
    let password_col = users.field_index("password").unwrap();

    let stored: Vec<String> =
        sqlx::query_scalar("SELECT password FROM users ORDER BY user_id")
            .fetch_all(&pool)
            .await
            .unwrap();

    for (row, hash) in users.rows.iter().zip(&stored) {
        let plain = row[password_col].to_string();
        assert!(verify_password(&plain, hash).unwrap());
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_empty_tables_write_nothing(pool: PgPool) {
    let report = generate(
        &SeedConfig::new(0),
        Destination::Database {
            pool: pool.clone(),
            options: reset_options(),
        },
    )
    .await
    .unwrap();

    assert_eq!(report.total_rows(), 0);
    assert_eq!(report.sequences_reset(), 0);
    assert_eq!(count_rows(&pool, "users").await, 0);
}
