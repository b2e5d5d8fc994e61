use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use std::path::PathBuf;
use storefront_cli::seeder::{self, DatabaseSinkOptions, Destination, SeedConfig, SinkReport};
use storefront_config::{DatabaseConfig, DatagenConfig};
use storefront_db::{PgPool, init_db_pool, run_migrations, truncate_tables};
use storefront_observability::init_basic_console_logging;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront CLI - Seed data generation for the storefront database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// One CSV file per table
    Files,
    /// Insert into the database at DATABASE_URL
    Database,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every storefront table and write it out
    Generate {
        /// Base volume; other tables scale from it (default: DATAGEN_COUNT or 20).
        /// At most 139860, the number of distinct default usernames
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Where to write the generated tables
        #[arg(short = 't', long, value_enum, default_value = "files")]
        to: Target,

        /// Output directory for CSV files (default: DATAGEN_OUT_DIR or ./data)
        #[arg(short = 'o', long)]
        out_dir: Option<PathBuf>,

        /// RNG seed for a reproducible run (default: DATAGEN_SEED)
        #[arg(short = 's', long)]
        seed: Option<u64>,

        /// Truncate storefront tables before inserting
        #[arg(long)]
        reset: bool,

        /// Store bcrypt hashes instead of plain-text user passwords
        #[arg(long)]
        hash_passwords: bool,
    },
    /// Apply the schema migrations
    Migrate,
    /// Migrate, clear and seed the database in one step
    InitDb {
        /// Base volume, at most 139860 (default: DATAGEN_COUNT or 20)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// RNG seed for a reproducible run
        #[arg(short = 's', long)]
        seed: Option<u64>,
    },
    /// Clear all storefront tables and restart their ids
    Clear,
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_basic_console_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("\n❌ Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let defaults = DatagenConfig::from_env();

    match cli.command {
        Commands::Generate {
            count,
            to,
            out_dir,
            seed,
            reset,
            hash_passwords,
        } => {
            let config = seed_config(count, seed, &defaults);
            let destination = match to {
                Target::Files => Destination::Files(out_dir.unwrap_or(defaults.out_dir)),
                Target::Database => Destination::Database {
                    pool: connect().await?,
                    options: DatabaseSinkOptions {
                        reset,
                        hash_passwords,
                        ..DatabaseSinkOptions::default()
                    },
                },
            };
            handle_generate(config, destination).await
        }
        Commands::Migrate => handle_migrate().await,
        Commands::InitDb { count, seed } => {
            handle_init_db(seed_config(count, seed, &defaults)).await
        }
        Commands::Clear => handle_clear().await,
    }
}

fn seed_config(count: Option<i64>, seed: Option<u64>, defaults: &DatagenConfig) -> SeedConfig {
    let config = SeedConfig::from_signed(count.unwrap_or(defaults.count));
    match seed.or(defaults.seed) {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

async fn connect() -> anyhow::Result<PgPool> {
    init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")
}

fn print_report(report: &SinkReport) {
    for table in &report.tables {
        match (&table.path, table.sequence_reset) {
            (Some(path), _) => println!(
                "   ✓ {:<14} {:>7} rows -> {}",
                table.name,
                table.rows,
                path.display()
            ),
            (None, Some(max)) => println!(
                "   ✓ {:<14} {:>7} rows (sequence at {})",
                table.name, table.rows, max
            ),
            (None, None) => println!("   ✓ {:<14} {:>7} rows", table.name, table.rows),
        }
    }
}

async fn handle_generate(config: SeedConfig, destination: Destination) -> anyhow::Result<()> {
    println!("🌱 Generating storefront data (count = {})...", config.count);

    let report = seeder::generate(&config, destination)
        .await
        .context("Failed to generate storefront data")?;

    print_report(&report);
    println!(
        "✅ Wrote {} rows across {} tables",
        report.total_rows(),
        report.tables.len()
    );
    Ok(())
}

async fn handle_migrate() -> anyhow::Result<()> {
    let pool = connect().await?;
    run_migrations(&pool).await.context("Failed to run migrations")?;
    println!("✅ Migrations applied");
    Ok(())
}

async fn handle_init_db(config: SeedConfig) -> anyhow::Result<()> {
    let pool = connect().await?;

    println!("📦 Applying migrations...");
    run_migrations(&pool).await.context("Failed to run migrations")?;

    let destination = Destination::Database {
        pool,
        options: DatabaseSinkOptions {
            reset: true,
            ..DatabaseSinkOptions::default()
        },
    };
    handle_generate(config, destination).await
}

async fn handle_clear() -> anyhow::Result<()> {
    let pool = connect().await?;

    println!("🗑️  Clearing storefront tables...");
    truncate_tables(&pool, &seeder::TABLE_ORDER)
        .await
        .context("Failed to clear tables")?;

    println!("✅ Cleared {} tables", seeder::TABLE_ORDER.len());
    Ok(())
}
