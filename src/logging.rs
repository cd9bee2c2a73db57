//! Logging setup for the `route-helpers` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the application. The binary uses [`init_logging`].

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

pub const ENV_LOG_LEVEL: &str = "ROUTE_HELPERS_LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "ROUTE_HELPERS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read `ROUTE_HELPERS_LOG_LEVEL` and `ROUTE_HELPERS_LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let format = match env::var(ENV_LOG_FORMAT)
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self {
            log_level: env::var(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            format,
        }
    }
}

/// Install a global subscriber writing to stderr
///
/// `RUST_LOG` wins over the configured level when set.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let level = match config.log_level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" => "warn",
        "error" => "error",
        "off" => "off",
        _ => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
