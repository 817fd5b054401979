use clap::Args;
use dda_core::error::Result;
use dda_core::{analyze_attempt, StruggleClassifier};
use serde_json::Value;

use super::Context;
use crate::request::{self, FullRequest};

#[derive(Args)]
pub struct FullArgs {
    /// JSON payload: {"userId", "time", "errors", "hints", "currentDifficulty",
    /// "history"?, "recentScores"?} ("-" reads stdin)
    pub input: String,
    /// Rule set to apply (trend_aware or legacy); overrides the config file
    #[arg(long)]
    pub policy: Option<String>,
}

pub async fn run(args: FullArgs, ctx: &Context) -> Result<Value> {
    let req: FullRequest = request::parse(&args.input)?;
    let user_id = request::validate_full(&req)?;
    let current = request::require_current_difficulty(req.current_difficulty)?;
    let history = req.resolved_history();

    let classifier = StruggleClassifier::new(ctx.profile_source()?);
    let adjuster = ctx.adjuster(args.policy.as_deref())?;
    let analysis = analyze_attempt(
        &classifier,
        &adjuster,
        &user_id,
        &req.telemetry,
        current,
        history.as_ref(),
    )
    .await;

    Ok(serde_json::to_value(analysis)?)
}
