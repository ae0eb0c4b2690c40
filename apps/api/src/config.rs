use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so startup only fails on unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Chromium-compatible binary used for server-side printing.
    /// `None` means print requests are blocked.
    pub print_browser: Option<PathBuf>,
    pub print_output_dir: PathBuf,
    pub print_load_timeout_ms: u64,
    pub print_settle_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            print_browser: None,
            print_output_dir: std::env::temp_dir(),
            print_load_timeout_ms: 10_000,
            print_settle_delay_ms: 500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            print_browser: optional_env("PRINT_BROWSER").map(PathBuf::from),
            print_output_dir: optional_env("PRINT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.print_output_dir),
            print_load_timeout_ms: parse_env("PRINT_LOAD_TIMEOUT_MS", defaults.print_load_timeout_ms)
                .context("PRINT_LOAD_TIMEOUT_MS must be a whole number of milliseconds")?,
            print_settle_delay_ms: parse_env("PRINT_SETTLE_DELAY_MS", defaults.print_settle_delay_ms)
                .context("PRINT_SETTLE_DELAY_MS must be a whole number of milliseconds")?,
        })
    }
}

/// Non-blank value of `key`, if set.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        None => Ok(default),
    }
}
