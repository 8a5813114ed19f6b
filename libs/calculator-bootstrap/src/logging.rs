//! Logging initialization for calculator binaries.
//!
//! Filter precedence: `RUST_LOG` > `-v` count > `logging.level` from config.
//! Output always goes to stderr.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section of the application config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `calculator=debug,info`.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Config with a different default level, keeping the text format.
    #[must_use]
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

/// Filter directive for the given verbosity (-v info, -vv debug, -vvv trace).
///
/// Zero falls back to the configured level.
#[must_use]
pub fn filter_directive(cfg: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => cfg.level.clone(),
        1 => "info".to_owned(),
        2 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

/// Install the global `tracing` subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(cfg, verbose)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match cfg.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if result.is_err() {
        tracing::debug!("global tracing subscriber already installed");
    }
}
