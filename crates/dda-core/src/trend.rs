//! Short-term performance trend over a learner's recent attempts.
//!
//! The trend is normally aggregated by the caller and handed in as a
//! [`RecentHistory`]. [`TrendSignal::from_recent_scores`] reproduces the
//! aggregation the backend applies to stored attempt scores, for callers that
//! only have the raw scores.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of most-recent scores considered when deriving a trend.
pub const TREND_WINDOW: usize = 5;

/// Minimum number of scores before any trend other than stable is reported.
pub const MIN_SCORES_FOR_TREND: usize = 3;

/// Scores strictly below this count as a struggle.
pub const STRUGGLE_SCORE_BELOW: f64 = 50.0;

/// Scores strictly above this count as an excellent attempt.
pub const EXCELLENT_SCORE_ABOVE: f64 = 80.0;

/// How many struggles (or excellent attempts) inside the window confirm a streak.
pub const STREAK_CONFIRMATIONS: usize = 3;

/// Direction of recent performance.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendSignal {
    #[default]
    Stable,
    Struggling,
    Excelling,
}

impl TrendSignal {
    /// Lenient parse: unrecognized trend names are treated as stable.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "struggling" => Self::Struggling,
            "excelling" => Self::Excelling,
            _ => Self::Stable,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Struggling => "struggling",
            Self::Excelling => "excelling",
        }
    }

    /// Derive a trend from attempt scores, most recent first.
    ///
    /// Only the first [`TREND_WINDOW`] scores are looked at. Fewer than
    /// [`MIN_SCORES_FOR_TREND`] scores is always stable. A struggle streak
    /// takes precedence over an excellence streak.
    pub fn from_recent_scores(scores: &[f64]) -> Self {
        let window = &scores[..scores.len().min(TREND_WINDOW)];
        if window.len() < MIN_SCORES_FOR_TREND {
            return Self::Stable;
        }

        let struggles = window.iter().filter(|s| **s < STRUGGLE_SCORE_BELOW).count();
        let excellences = window.iter().filter(|s| **s > EXCELLENT_SCORE_ABOVE).count();

        if struggles >= STREAK_CONFIRMATIONS {
            Self::Struggling
        } else if excellences >= STREAK_CONFIRMATIONS {
            Self::Excelling
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown or null trends read as stable.
impl<'de> Deserialize<'de> for TrendSignal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

/// Caller-supplied summary of recent attempts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecentHistory {
    #[serde(default)]
    pub trend: TrendSignal,
    /// How many attempts the trend was aggregated from (informational).
    #[serde(default)]
    pub recent_count: u32,
}

impl RecentHistory {
    pub fn new(trend: TrendSignal, recent_count: u32) -> Self {
        Self { trend, recent_count }
    }

    /// Build a history from raw scores, most recent first.
    pub fn from_recent_scores(scores: &[f64]) -> Self {
        Self {
            trend: TrendSignal::from_recent_scores(scores),
            recent_count: scores.len().min(TREND_WINDOW) as u32,
        }
    }
}
