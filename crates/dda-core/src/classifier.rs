//! Struggle classification from attempt telemetry.
//!
//! Each telemetry dimension (time, errors, hints) is tested against a Super
//! threshold first and a Medium threshold second, so a dimension counts
//! toward at most one severity. The attempt is classified at a severity only
//! when at least two dimensions independently reach it; one extreme signal on
//! its own is not enough.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::profile::ProfileSource;

/// Time on task (seconds) that counts as a medium struggle signal.
pub const TIME_MEDIUM_SECONDS: f64 = 300.0;
/// Time on task (seconds) that counts as a super struggle signal.
pub const TIME_SUPER_SECONDS: f64 = 480.0;
pub const ERRORS_MEDIUM: u32 = 5;
pub const ERRORS_SUPER: u32 = 8;
pub const HINTS_MEDIUM: u32 = 2;
pub const HINTS_SUPER: u32 = 3;

/// Signals at one severity needed to classify at that severity.
pub const INDICATORS_REQUIRED: u32 = 2;

/// Struggle severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StruggleStatus {
    NotStruggling,
    MediumStruggling,
    SuperStruggling,
}

impl StruggleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStruggling => "NotStruggling",
            Self::MediumStruggling => "MediumStruggling",
            Self::SuperStruggling => "SuperStruggling",
        }
    }

    /// Exact-name parse; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NotStruggling" => Some(Self::NotStruggling),
            "MediumStruggling" => Some(Self::MediumStruggling),
            "SuperStruggling" => Some(Self::SuperStruggling),
            _ => None,
        }
    }
}

impl std::fmt::Display for StruggleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw telemetry for one puzzle attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct AttemptTelemetry {
    /// Wall-clock seconds spent on the attempt.
    #[serde(rename = "time", default)]
    pub time_seconds: f64,
    /// Failed submissions.
    #[serde(rename = "errors", default)]
    pub error_count: u32,
    #[serde(rename = "hints", default)]
    pub hints_used: u32,
}

impl AttemptTelemetry {
    pub fn new(time_seconds: f64, error_count: u32, hints_used: u32) -> Self {
        Self {
            time_seconds,
            error_count,
            hints_used,
        }
    }
}

/// Classification outcome with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StruggleVerdict {
    #[serde(skip)]
    pub status: StruggleStatus,
    /// One entry per threshold crossed, in time, errors, hints order.
    pub factors: Vec<String>,
    #[serde(rename = "super_indicators")]
    pub super_indicator_count: u32,
    #[serde(rename = "medium_indicators")]
    pub medium_indicator_count: u32,
    pub student_level_at_attempt: i64,
}

/// Severity a single dimension reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Super,
    Medium,
}

struct Dimension {
    name: &'static str,
    medium: f64,
    super_: f64,
    medium_factor: &'static str,
    super_factor: &'static str,
}

const TIME: Dimension = Dimension {
    name: "time",
    medium: TIME_MEDIUM_SECONDS,
    super_: TIME_SUPER_SECONDS,
    medium_factor: "Time: Medium Struggling (5+ mins)",
    super_factor: "Time: Super Struggling (8+ mins)",
};

const ERRORS: Dimension = Dimension {
    name: "errors",
    medium: ERRORS_MEDIUM as f64,
    super_: ERRORS_SUPER as f64,
    medium_factor: "Errors: Medium Struggling (5+ errors)",
    super_factor: "Errors: Super Struggling (8+ errors)",
};

const HINTS: Dimension = Dimension {
    name: "hints",
    medium: HINTS_MEDIUM as f64,
    super_: HINTS_SUPER as f64,
    medium_factor: "Hints: Medium Struggling (2+ hints)",
    super_factor: "Hints: Super Struggling (3+ hints)",
};

impl Dimension {
    fn signal(&self, value: f64) -> Option<Signal> {
        if value >= self.super_ {
            Some(Signal::Super)
        } else if value >= self.medium {
            Some(Signal::Medium)
        } else {
            None
        }
    }

    fn factor(&self, signal: Signal) -> &'static str {
        match signal {
            Signal::Super => self.super_factor,
            Signal::Medium => self.medium_factor,
        }
    }
}

/// Classify telemetry without touching the profile store.
pub fn evaluate(telemetry: &AttemptTelemetry, student_level: i64) -> StruggleVerdict {
    let readings = [
        (&TIME, telemetry.time_seconds),
        (&ERRORS, f64::from(telemetry.error_count)),
        (&HINTS, f64::from(telemetry.hints_used)),
    ];

    let mut factors = Vec::new();
    let mut super_count = 0;
    let mut medium_count = 0;

    for (dimension, value) in readings {
        let Some(signal) = dimension.signal(value) else {
            continue;
        };
        debug!(dimension = dimension.name, value, ?signal, "threshold crossed");
        match signal {
            Signal::Super => super_count += 1,
            Signal::Medium => medium_count += 1,
        }
        factors.push(dimension.factor(signal).to_string());
    }

    let status = if super_count >= INDICATORS_REQUIRED {
        StruggleStatus::SuperStruggling
    } else if medium_count >= INDICATORS_REQUIRED {
        StruggleStatus::MediumStruggling
    } else {
        StruggleStatus::NotStruggling
    };

    StruggleVerdict {
        status,
        factors,
        super_indicator_count: super_count,
        medium_indicator_count: medium_count,
        student_level_at_attempt: student_level,
    }
}

/// Wire shape of the `analysis` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptAnalysis {
    pub time_consumed: f64,
    pub error_count: u32,
    pub hints_used: u32,
    #[serde(flatten)]
    pub verdict: StruggleVerdict,
}

/// Full classification result for one attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    pub user_id: String,
    pub status: StruggleStatus,
    /// Evaluation time; informational only.
    pub timestamp: DateTime<Utc>,
    pub analysis: AttemptAnalysis,
}

impl ClassificationReport {
    pub fn verdict(&self) -> &StruggleVerdict {
        &self.analysis.verdict
    }
}

/// Classifies attempts and stamps them with the learner's current level.
pub struct StruggleClassifier<S> {
    profiles: S,
}

impl<S: ProfileSource> StruggleClassifier<S> {
    pub fn new(profiles: S) -> Self {
        Self { profiles }
    }

    /// Classify one attempt. The level lookup is best-effort and never fails
    /// the classification.
    pub async fn classify(
        &self,
        user_id: &str,
        telemetry: &AttemptTelemetry,
    ) -> ClassificationReport {
        let level = self.profiles.fetch_profile(user_id).await.level();
        let verdict = evaluate(telemetry, level);
        debug!(user_id, status = %verdict.status, "attempt classified");

        ClassificationReport {
            user_id: user_id.to_string(),
            status: verdict.status,
            timestamp: Utc::now(),
            analysis: AttemptAnalysis {
                time_consumed: telemetry.time_seconds,
                error_count: telemetry.error_count,
                hints_used: telemetry.hints_used,
                verdict,
            },
        }
    }
}
