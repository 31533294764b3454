//! Configuration loading and resolution
//!
//! Every bootstrap setting is resolved in this priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing TOML file is not an error: a warning is logged and the compiled
//! defaults apply. A TOML file that exists but does not parse is an error.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::{Error, Result};

/// Environment variable overriding the catalog file location
pub const ENV_DATA_FILE: &str = "PICKEM_DATA_FILE";
/// Environment variable overriding the listen host
pub const ENV_HOST: &str = "PICKEM_HOST";
/// Environment variable overriding the listen port
pub const ENV_PORT: &str = "PICKEM_PORT";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PICKEM_LOG_LEVEL";
/// Environment variable pointing at the TOML config file
pub const ENV_CONFIG: &str = "PICKEM_CONFIG";

/// TOML configuration file contents
///
/// All keys are optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to the catalog JSON document
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Listen host
    #[serde(default)]
    pub host: Option<String>,

    /// Listen port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Built-in defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            data_file: default_data_dir().join("db.json"),
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_file: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve configuration from CLI, environment, TOML file and defaults
    pub fn resolve(cli: CliOverrides) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .or_else(|| std::env::var_os(ENV_CONFIG).map(PathBuf::from))
            .or_else(default_config_path);

        let toml_config = match config_path {
            Some(path) => load_toml_config(&path)?,
            None => TomlConfig::default(),
        };

        Self::resolve_with(cli, toml_config)
    }

    /// Resolve against an already-loaded TOML config
    pub fn resolve_with(cli: CliOverrides, toml_config: TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();

        let data_file = cli
            .data_file
            .or_else(|| std::env::var_os(ENV_DATA_FILE).map(PathBuf::from))
            .or(toml_config.data_file)
            .unwrap_or(defaults.data_file);

        let host = cli
            .host
            .or_else(|| std::env::var(ENV_HOST).ok())
            .or(toml_config.host)
            .unwrap_or(defaults.host);

        let port = match cli.port {
            Some(port) => port,
            None => match std::env::var(ENV_PORT) {
                Ok(value) => value.parse::<u16>().map_err(|e| {
                    Error::Config(format!("Invalid {} '{}': {}", ENV_PORT, value, e))
                })?,
                Err(_) => toml_config.port.unwrap_or(defaults.port),
            },
        };

        let log_level = cli
            .log_level
            .or_else(|| std::env::var(ENV_LOG_LEVEL).ok())
            .or(toml_config.logging.level)
            .unwrap_or(defaults.log_level);

        Ok(Self {
            data_file,
            host,
            port,
            log_level,
        })
    }

    /// `host:port` string suitable for binding
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load a TOML config file
///
/// Missing file: warning plus defaults. Unreadable or malformed file: error.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!("Config file {} not found, using defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Default TOML config location (`<config_dir>/pickem/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pickem").join("config.toml"))
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("pickem"))
        .unwrap_or_else(|| PathBuf::from("./pickem_data"))
}
