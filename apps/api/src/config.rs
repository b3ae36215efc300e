use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The analysis service base URL lives here and nowhere else: handlers
/// receive it through `AppState` instead of hard-coding the address.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis_service_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Optional override checked before the built-in dataset candidate paths.
    pub jobs_csv_path: Option<String>,
    /// Total per-request budget for upstream calls, in seconds.
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            analysis_service_url: require_env("ANALYSIS_SERVICE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jobs_csv_path: std::env::var("JOBS_CSV_PATH").ok(),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
