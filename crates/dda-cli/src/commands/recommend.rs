use clap::Args;
use dda_core::{recommended_starting_difficulty, ReportedStatus};
use serde_json::{json, Value};

#[derive(Args)]
pub struct RecommendArgs {
    /// Struggle status (NotStruggling, MediumStruggling, SuperStruggling)
    pub status: String,
}

pub fn run(args: RecommendArgs) -> Value {
    let status = ReportedStatus::parse(&args.status);
    let tier = recommended_starting_difficulty(&status);
    json!({
        "irt_status": status,
        "recommended_difficulty": tier,
    })
}
