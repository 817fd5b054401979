pub mod adjust;
pub mod analyze;
pub mod config;
pub mod full;
pub mod recommend;

use std::path::{Path, PathBuf};

use dda_core::error::Result;
use dda_core::{
    AdjustmentPolicy, Config, DifficultyAdjuster, ProfileStoreSettings, RestProfileSource,
};

/// Startup state shared by every subcommand.
pub struct Context {
    pub config: Config,
    config_path: PathBuf,
    env_file: Option<PathBuf>,
}

impl Context {
    pub fn load(config_path: Option<PathBuf>, env_file: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(Config::path);
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config,
            config_path,
            env_file,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn profile_store(&self) -> Result<ProfileStoreSettings> {
        self.config.resolve_profile_store(self.env_file.as_deref())
    }

    pub fn profile_source(&self) -> Result<RestProfileSource> {
        Ok(RestProfileSource::new(&self.profile_store()?))
    }

    /// Adjuster for the `--policy` override, or the configured policy.
    ///
    /// An unknown override name is a validation error, not a usage error.
    pub fn adjuster(&self, policy_override: Option<&str>) -> Result<DifficultyAdjuster> {
        let policy = match policy_override {
            Some(name) => name.parse::<AdjustmentPolicy>()?,
            None => self.config.adjustment.policy,
        };
        Ok(DifficultyAdjuster::new(policy))
    }
}
