//! Classify-then-adjust for a single attempt.

use serde::Serialize;

use crate::adjuster::{AdjustmentResult, AttemptMetrics, DifficultyAdjuster, ReportedStatus};
use crate::classifier::{AttemptTelemetry, ClassificationReport, StruggleClassifier, StruggleStatus};
use crate::difficulty::DifficultyTier;
use crate::profile::ProfileSource;
use crate::trend::{RecentHistory, TrendSignal};

/// Short digest of a full analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub student_status: StruggleStatus,
    pub recent_trend: TrendSignal,
    pub previous_difficulty: DifficultyTier,
    pub new_difficulty: DifficultyTier,
    pub difficulty_changed: bool,
}

/// Classification and adjustment for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullAnalysis {
    pub irt: ClassificationReport,
    pub dda: AdjustmentResult,
    pub summary: AnalysisSummary,
}

/// Run the classifier, then feed its status and the same telemetry into the
/// adjuster. A missing history is a stable trend.
pub async fn analyze_attempt<S: ProfileSource>(
    classifier: &StruggleClassifier<S>,
    adjuster: &DifficultyAdjuster,
    user_id: &str,
    telemetry: &AttemptTelemetry,
    current: DifficultyTier,
    history: Option<&RecentHistory>,
) -> FullAnalysis {
    let irt = classifier.classify(user_id, telemetry).await;

    let metrics =
        AttemptMetrics::new(telemetry.time_seconds, telemetry.error_count, telemetry.hints_used);
    let dda = adjuster.adjust(&ReportedStatus::from(irt.status), current, Some(&metrics), history);

    let summary = AnalysisSummary {
        student_status: irt.status,
        recent_trend: dda.trend,
        previous_difficulty: dda.previous_difficulty,
        new_difficulty: dda.new_difficulty,
        difficulty_changed: dda.difficulty_changed,
    };

    FullAnalysis { irt, dda, summary }
}
