use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directives used when `RUST_LOG` is not set.
///
/// The storefront crates log at `log_level`; sqlx statement logging is kept
/// at warn so bulk inserts don't flood the console.
pub fn default_filter(log_level: &str) -> String {
    format!(
        "storefront={log_level},storefront_cli={log_level},storefront_db={log_level},sqlx=warn"
    )
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Filtering**: `RUST_LOG` wins when set; otherwise `LOG_LEVEL` (default
///   "info") is applied to the storefront crates
/// - **Format**: Compact, with file and line, ANSI colors
/// - **Writer**: stderr, so generated output piped from stdout stays clean
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let directives = default_filter("debug");
        assert!(directives.contains("storefront_cli=debug"));
        assert!(directives.contains("sqlx=warn"));
        assert!(EnvFilter::try_new(directives).is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        init_basic_console_logging();
        init_basic_console_logging();
    }
}
