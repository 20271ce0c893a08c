use anyhow::{bail, Context, Result};

/// Largest jitter the scorer will add or subtract.
pub const MAX_JITTER_AMPLITUDE: f64 = 0.05;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub jitter_amplitude: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            jitter_amplitude: parse_jitter(std::env::var("MATCH_JITTER_AMPLITUDE").ok())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_jitter(raw: Option<String>) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(MAX_JITTER_AMPLITUDE);
    };
    let amplitude = raw
        .trim()
        .parse::<f64>()
        .context("MATCH_JITTER_AMPLITUDE must be a number")?;
    if !(0.0..=MAX_JITTER_AMPLITUDE).contains(&amplitude) {
        bail!("MATCH_JITTER_AMPLITUDE must be between 0 and {MAX_JITTER_AMPLITUDE}, got {amplitude}");
    }
    Ok(amplitude)
}
