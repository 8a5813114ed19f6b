//! Layered application configuration.
//!
//! 1) defaults -> 2) YAML (if provided) -> 3) env (`CALCULATOR__*`) -> 4) CLI overrides

use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

use calculator::CalculatorConfig;
use calculator_bootstrap::LoggingConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables merged into the config.
pub const ENV_PREFIX: &str = "CALCULATOR__";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("failed to render configuration: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

/// CORS is disabled while `allowed_origins` is empty; `"*"` allows any origin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// Command-line values that override the loaded config.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `CALCULATOR__*` env vars.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is missing, is not valid YAML, or
    /// contains unknown or mistyped keys.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file_exact(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Apply CLI overrides on top of the loaded config.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBindAddr` if a port override is given and
    /// the configured bind address does not parse.
    pub fn apply_cli_overrides(&mut self, cli: CliOverrides) -> Result<(), ConfigError> {
        if let Some(port) = cli.port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        Ok(())
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns `ConfigError::InvalidBindAddr` if `bind_addr` is not `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }
}
