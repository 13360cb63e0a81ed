//! # deco-config
//!
//! Layered configuration loading for the `primes` CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PRIMES_*` prefix, `__` as separator)
//! 2. Working-directory `primes.toml`
//! 3. User-level `~/.config/primes/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `PRIMES_RUN__BOUND` -> `run.bound`, `PRIMES_LOG__LEVEL` -> `log.level`.
//!
//! # Usage
//!
//! ```no_run
//! use deco_config::DecoConfig;
//!
//! let config = DecoConfig::load_with_dotenv().expect("config");
//! println!("scanning below {}", config.run.bound);
//! ```

mod error;
mod log;
mod run;

pub use error::ConfigError;
pub use log::LogConfig;
pub use run::RunConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "primes.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecoConfig {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DecoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the working directory (if present), then [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so callers and tests can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("PRIMES_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("primes").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use deco_wrap::PipelineKind;

    use super::*;

    #[test]
    fn default_config_matches_fixed_run() {
        let config = DecoConfig::default();
        assert_eq!(config.run.bound.get(), 100_000);
        assert_eq!(config.run.pipeline, PipelineKind::LoggedTimed);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn figment_extracts_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config: DecoConfig = DecoConfig::figment().extract()?;
            assert_eq!(config.run.bound.get(), 100_000);
            Ok(())
        });
    }
}
