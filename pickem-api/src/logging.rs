//! Tracing subscriber setup
//!
//! The subscriber is installed before configuration is resolved so that
//! config loading can log. It starts at the level given on the command line
//! (or `PICKEM_LOG_LEVEL`, else `info`) and is switched to the resolved level
//! once configuration is known. `RUST_LOG`, when set, wins throughout.

use anyhow::{Context, Result};
use pickem_common::config::ENV_LOG_LEVEL;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

const DEFAULT_LEVEL: &str = "info";

/// Handle to the installed filter
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Switch to the configured level, unless `RUST_LOG` controls filtering
    pub fn apply_level(&self, level: &str) -> Result<()> {
        if self.from_env {
            return Ok(());
        }
        let filter = filter_for(level)?;
        self.filter
            .reload(filter)
            .context("Failed to update log filter")
    }

    /// Whether `RUST_LOG` is in charge of filtering
    pub fn is_from_env(&self) -> bool {
        self.from_env
    }
}

/// Install the global subscriber
///
/// `early_level` is the command-line level, if one was given.
pub fn init(early_level: Option<&str>) -> Result<LogHandle> {
    let from_env = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter = if from_env {
        EnvFilter::try_from_default_env().context("Invalid RUST_LOG")?
    } else {
        let level = early_level
            .map(str::to_string)
            .or_else(|| std::env::var(ENV_LOG_LEVEL).ok())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        // A bad level is reported by apply_level once config is resolved
        filter_for(&level).or_else(|_| filter_for(DEFAULT_LEVEL))?
    };

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(LogHandle {
        filter: handle,
        from_env,
    })
}

/// Filter enabling `level` for this service's crates and the HTTP trace layer
pub fn filter_for(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(format!(
        "pickem_api={level},pickem_common={level},tower_http={level}"
    ))
    .with_context(|| format!("Invalid log level '{}'", level))
}
