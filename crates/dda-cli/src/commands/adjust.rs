use clap::Args;
use dda_core::error::Result;
use serde_json::Value;

use super::Context;
use crate::request::{self, AdjustRequest};

#[derive(Args)]
pub struct AdjustArgs {
    /// JSON payload: {"irtStatus", "currentDifficulty", "metrics"?, "history"?} ("-" reads stdin)
    pub input: String,
    /// Rule set to apply (trend_aware or legacy); overrides the config file
    #[arg(long)]
    pub policy: Option<String>,
}

pub fn run(args: AdjustArgs, ctx: &Context) -> Result<Value> {
    let req: AdjustRequest = request::parse(&args.input)?;

    let adjuster = ctx.adjuster(args.policy.as_deref())?;
    let result = adjuster.adjust(
        &req.irt_status.unwrap_or_default(),
        req.current_difficulty.unwrap_or_default(),
        req.metrics.as_ref(),
        req.history.as_ref(),
    );

    Ok(serde_json::to_value(result)?)
}
