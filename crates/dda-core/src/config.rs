//! TOML-based configuration.
//!
//! Stores:
//! - Profile store endpoint and API key (optional; lookups degrade without them)
//! - An optional `KEY=VALUE` env file to read credentials from
//! - Which difficulty adjustment policy to run
//!
//! Configuration is stored at `~/.config/dda/config.toml`. The file is read
//! once at startup; the evaluation path only ever sees the resolved values.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::adjuster::AdjustmentPolicy;
use crate::error::{ConfigError, Result};

/// Environment variable holding the profile store base URL.
pub const URL_VAR: &str = "SUPABASE_URL";

/// Environment variable holding the profile store API key.
pub const API_KEY_VAR: &str = "SUPABASE_ANON_KEY";

const CONFIG_FILE: &str = "config.toml";

/// Returns `~/.config/dda[-dev]/` based on DDA_ENV.
///
/// Set DDA_ENV=dev to use the development config directory.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DDA_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("dda-dev")
    } else {
        base_dir.join("dda")
    }
}

/// Profile store section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileStoreConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// `KEY=VALUE` file consulted after the environment and this section.
    #[serde(default)]
    pub env_file: Option<PathBuf>,
}

/// Adjustment section.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdjustmentConfig {
    #[serde(default)]
    pub policy: AdjustmentPolicy,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/dda/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub profile_store: ProfileStoreConfig,
    #[serde(default)]
    pub adjustment: AdjustmentConfig,
}

/// Credentials after every source has been consulted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProfileStoreSettings {
    pub url: Option<String>,
    pub api_key: Option<String>,
}

impl ProfileStoreSettings {
    /// URL and key, if both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.url.as_deref(), self.api_key.as_deref()) {
            (Some(url), Some(key)) => Some((url, key)),
            _ => None,
        }
    }
}

// The API key never shows up in logs.
impl fmt::Debug for ProfileStoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileStoreSettings")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Path of the default config file.
    pub fn path() -> PathBuf {
        config_dir().join(CONFIG_FILE)
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Resolve profile store credentials from the process environment.
    ///
    /// See [`Config::resolve_profile_store_with`] for the precedence rules.
    pub fn resolve_profile_store(
        &self,
        explicit_env_file: Option<&Path>,
    ) -> Result<ProfileStoreSettings> {
        self.resolve_profile_store_with(explicit_env_file, |name| std::env::var(name).ok())
    }

    /// Resolve profile store credentials. For each value the first non-empty
    /// source wins:
    ///
    /// 1. `explicit_env_file` (must exist)
    /// 2. `env` lookups of [`URL_VAR`] / [`API_KEY_VAR`]
    /// 3. the `[profile_store]` section
    /// 4. the `[profile_store] env_file` (skipped with a warning if unreadable)
    pub fn resolve_profile_store_with<F>(
        &self,
        explicit_env_file: Option<&Path>,
        env: F,
    ) -> Result<ProfileStoreSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = match explicit_env_file {
            Some(path) => read_env_file(path)?,
            None => HashMap::new(),
        };

        let configured = match &self.profile_store.env_file {
            Some(path) => read_env_file(path).unwrap_or_else(|e| {
                warn!(error = %e, "skipping unreadable env file");
                HashMap::new()
            }),
            None => HashMap::new(),
        };

        let pick = |var: &str, from_config: &Option<String>| {
            non_empty(explicit.get(var).cloned())
                .or_else(|| non_empty(env(var)))
                .or_else(|| non_empty(from_config.clone()))
                .or_else(|| non_empty(configured.get(var).cloned()))
        };

        Ok(ProfileStoreSettings {
            url: pick(URL_VAR, &self.profile_store.url),
            api_key: pick(API_KEY_VAR, &self.profile_store.api_key),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Read a `KEY=VALUE` file.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(parse_env_file(&content))
}

/// Parse `KEY=VALUE` lines. Comment lines and lines without `=` are skipped;
/// matching surrounding quotes are stripped from values.
pub fn parse_env_file(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
