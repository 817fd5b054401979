//! JSON payloads accepted on the command line.

use std::io::Read;

use dda_core::error::{Result, ValidationError};
use dda_core::{AttemptMetrics, AttemptTelemetry, DifficultyTier, RecentHistory, ReportedStatus};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Read the positional JSON argument; `-` reads stdin.
pub fn read_payload(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(arg.to_string())
    }
}

pub fn parse<T: DeserializeOwned>(arg: &str) -> Result<T> {
    let raw = read_payload(arg)?;
    Ok(serde_json::from_str(&raw)?)
}

/// `dda analyze` input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub telemetry: AttemptTelemetry,
}

impl AnalyzeRequest {
    pub fn validate(self) -> Result<(String, AttemptTelemetry)> {
        let user_id = require_user_id(self.user_id)?;
        validate_time(self.telemetry.time_seconds)?;
        Ok((user_id, self.telemetry))
    }
}

/// `dda adjust` input. Absent fields take their documented defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustRequest {
    #[serde(default)]
    pub irt_status: Option<ReportedStatus>,
    #[serde(default)]
    pub current_difficulty: Option<DifficultyTier>,
    #[serde(default)]
    pub metrics: Option<AttemptMetrics>,
    #[serde(default)]
    pub history: Option<RecentHistory>,
}

/// `dda full` input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub telemetry: AttemptTelemetry,
    #[serde(default)]
    pub current_difficulty: Option<DifficultyTier>,
    #[serde(default)]
    pub history: Option<RecentHistory>,
    /// Most recent first.
    #[serde(default)]
    pub recent_scores: Option<Vec<f64>>,
}

impl FullRequest {
    /// Explicit history wins over raw scores.
    pub fn resolved_history(&self) -> Option<RecentHistory> {
        self.history.or_else(|| {
            self.recent_scores
                .as_deref()
                .map(RecentHistory::from_recent_scores)
        })
    }
}

fn require_user_id(user_id: Option<String>) -> Result<String> {
    match user_id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ValidationError::MissingField("userId".to_string()).into()),
    }
}

pub fn require_current_difficulty(value: Option<DifficultyTier>) -> Result<DifficultyTier> {
    value.ok_or_else(|| ValidationError::MissingField("currentDifficulty".to_string()).into())
}

pub fn validate_full(request: &FullRequest) -> Result<String> {
    validate_time(request.telemetry.time_seconds)?;
    require_user_id(request.user_id.clone())
}

fn validate_time(time: f64) -> Result<()> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: "time".to_string(),
            message: format!("expected a non-negative number of seconds, got {time}"),
        }
        .into())
    }
}
