//! # wk-config
//!
//! Layered configuration loading for the WaniKani client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WK_*` prefix, `__` as separator)
//! 2. Project-level `.wanikani/config.toml`
//! 3. User-level `~/.config/wanikani/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WK_API__TOKEN` -> `api.token`, `WK_RETRY__RETRY_FOREVER` ->
//! `retry.retry_forever`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wk_config::WkConfig;
//!
//! let config = WkConfig::load_with_dotenv().expect("config");
//!
//! if config.api.is_configured() {
//!     println!("API root: {}", config.api.base_url);
//! }
//! ```

mod api;
mod decode;
mod error;
mod insights;
mod retry;

pub use api::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_REVISION};
pub use decode::DecodeConfig;
pub use error::ConfigError;
pub use insights::InsightsConfig;
pub use retry::RetryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local settings file, relative to the working directory.
const PROJECT_CONFIG: &str = ".wanikani/config.toml";

const ENV_PREFIX: &str = "WK_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WkConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub decode: DecodeConfig,
    #[serde(default)]
    pub insights: InsightsConfig,
}

impl WkConfig {
    /// Merge and validate every source in [`Self::figment`]. A `.env` file is
    /// not read; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// [`Self::load`], after exporting the nearest `.env` into the process
    /// environment so `WK_*` entries there take effect.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from a caller-built figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Provider chain, lowest priority first: defaults, the user file, the
    /// project file, then `WK_*` variables.
    #[must_use]
    pub fn figment() -> Figment {
        let user_file = Self::global_config_path().filter(|path| path.exists());
        let project_file = PathBuf::from(PROJECT_CONFIG).canonicalize().ok();

        [user_file, project_file]
            .into_iter()
            .flatten()
            .fold(
                Figment::from(Serialized::defaults(Self::default())),
                |figment, path| figment.merge(Toml::file(path)),
            )
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty `api.base_url`, a
    /// zero `api.timeout_secs`, or unbounded retry with a zero
    /// `retry.fallback_wait_secs`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: "must not be empty",
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs",
                reason: "must be greater than zero",
            });
        }
        if self.retry.retry_forever && self.retry.fallback_wait_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.fallback_wait_secs",
                reason: "must be greater than zero when retry.retry_forever is set",
            });
        }
        Ok(())
    }

    /// The `api` section, provided a token is set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] naming `api.token`.
    pub fn require_api(&self) -> Result<&ApiConfig, ConfigError> {
        if self.api.is_configured() {
            Ok(&self.api)
        } else {
            Err(ConfigError::NotConfigured {
                section: "api",
                field: "token",
                env: "WK_API__TOKEN",
            })
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wanikani").join("config.toml"))
    }

    /// Read the nearest `.env`: first in the manifest directory or up to two
    /// parents (the workspace root when run through cargo), else the working
    /// directory. A missing file is not an error.
    fn load_dotenv_from_workspace() {
        let from_manifest = std::env::var_os("CARGO_MANIFEST_DIR").and_then(|dir| {
            PathBuf::from(dir)
                .ancestors()
                .take(3)
                .map(|dir| dir.join(".env"))
                .find(|path| path.is_file())
        });

        match from_manifest {
            Some(path) => {
                let _ = dotenvy::from_path(path);
            }
            None => {
                let _ = dotenvy::dotenv();
            }
        }
    }
}
