use clap::Subcommand;
use dda_core::error::Result;
use dda_core::Config;
use serde_json::{json, Value};

use super::Context;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved configuration (API key redacted)
    Show,
    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction, ctx: &Context) -> Result<Value> {
    match action {
        ConfigAction::Show => {
            let settings = ctx.profile_store()?;
            Ok(json!({
                "config_path": ctx.config_path().display().to_string(),
                "profile_store": {
                    "url": settings.url,
                    "api_key_configured": settings.api_key.is_some(),
                    "configured": settings.credentials().is_some(),
                },
                "adjustment": {
                    "policy": ctx.config.adjustment.policy,
                },
            }))
        }
        ConfigAction::Path => Ok(json!({ "config_path": Config::path().display().to_string() })),
    }
}
