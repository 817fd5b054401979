use clap::Args;
use dda_core::error::Result;
use dda_core::StruggleClassifier;
use serde_json::Value;

use super::Context;
use crate::request::{self, AnalyzeRequest};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON payload: {"userId", "time", "errors", "hints"} ("-" reads stdin)
    pub input: String,
}

pub async fn run(args: AnalyzeArgs, ctx: &Context) -> Result<Value> {
    let (user_id, telemetry) = request::parse::<AnalyzeRequest>(&args.input)?.validate()?;

    let classifier = StruggleClassifier::new(ctx.profile_source()?);
    let report = classifier.classify(&user_id, &telemetry).await;

    Ok(serde_json::to_value(report)?)
}
