//! Difficulty adjustment from a struggle verdict.
//!
//! Two rule sets exist and are kept separate:
//!
//! - [`AdjustmentPolicy::TrendAware`] (default): only moves a tier at a time,
//!   and needs a confirming trend before acting on moderate struggle or on
//!   good performance. The one exception is the perfect-score fast-track off
//!   Easy.
//! - [`AdjustmentPolicy::Legacy`]: the earlier single-signal rules, which read
//!   the status and metrics only and can jump straight to Easy or Hard.
//!
//! Rules are evaluated top to bottom and the first match wins.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::classifier::StruggleStatus;
use crate::difficulty::DifficultyTier;
use crate::error::ValidationError;
use crate::trend::{RecentHistory, TrendSignal};

/// Fast-track requires an attempt strictly faster than this (seconds).
pub const FAST_TRACK_MAX_SECONDS: f64 = 60.0;

// Legacy thresholds.
const LEGACY_EXCELLENT_MAX_SECONDS: f64 = 120.0;
const LEGACY_EXCELLENT_MAX_ERRORS: u32 = 2;
const LEGACY_GOOD_MAX_SECONDS: f64 = 210.0;
const LEGACY_GOOD_MAX_ERRORS: u32 = 4;
const LEGACY_GOOD_MAX_HINTS: u32 = 1;

/// Which rule set to run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentPolicy {
    #[default]
    TrendAware,
    Legacy,
}

impl FromStr for AdjustmentPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trend_aware" | "trend-aware" => Ok(Self::TrendAware),
            "legacy" => Ok(Self::Legacy),
            other => Err(ValidationError::InvalidValue {
                field: "policy".to_string(),
                message: format!("unknown policy '{other}' (expected trend_aware or legacy)"),
            }),
        }
    }
}

/// Status as reported by the caller. Unrecognized names are kept verbatim so
/// they can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedStatus {
    Known(StruggleStatus),
    Unrecognized(String),
}

impl ReportedStatus {
    pub fn parse(value: &str) -> Self {
        match StruggleStatus::parse(value) {
            Some(status) => Self::Known(status),
            None => Self::Unrecognized(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(status) => status.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Default for ReportedStatus {
    fn default() -> Self {
        Self::Known(StruggleStatus::NotStruggling)
    }
}

impl From<StruggleStatus> for ReportedStatus {
    fn from(status: StruggleStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportedStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// Fine-grained metrics for the attempt being judged.
///
/// Each missing field takes a worst-case value (`time = 999`, `errors = 99`,
/// `hints = 99`) so that absent data can never unlock an upgrade.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AttemptMetrics {
    #[serde(default = "worst_case_time")]
    pub time: f64,
    #[serde(default = "worst_case_errors")]
    pub errors: u32,
    #[serde(default = "worst_case_hints")]
    pub hints: u32,
}

fn worst_case_time() -> f64 {
    999.0
}
fn worst_case_errors() -> u32 {
    99
}
fn worst_case_hints() -> u32 {
    99
}

impl Default for AttemptMetrics {
    fn default() -> Self {
        Self {
            time: worst_case_time(),
            errors: worst_case_errors(),
            hints: worst_case_hints(),
        }
    }
}

impl AttemptMetrics {
    pub fn new(time: f64, errors: u32, hints: u32) -> Self {
        Self { time, errors, hints }
    }

    fn is_perfect_fast(&self) -> bool {
        self.errors == 0 && self.hints == 0 && self.time < FAST_TRACK_MAX_SECONDS
    }
}

/// The rule that produced an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentRule {
    SevereStruggleRescue,
    ConfirmedStruggleStreak,
    InsufficientConfirmingHistory,
    ConfirmedExcellenceStreak,
    PerfectScoreFastTrack,
    ConsistencyUnproven,
    UnknownStatus,
    LegacySevereReset,
    LegacyModerateStepDown,
    LegacyExcellentJump,
    LegacyGoodIncrease,
    LegacyStandardIncrease,
}

impl AdjustmentRule {
    /// Fixed justification reported for this rule.
    pub fn reason(self) -> &'static str {
        match self {
            Self::SevereStruggleRescue => {
                "Student severely struggling - decreasing difficulty by 1 level"
            }
            Self::ConfirmedStruggleStreak => {
                "Moderate struggle confirmed by recent struggling streak - decreasing difficulty by 1 level"
            }
            Self::InsufficientConfirmingHistory => {
                "Moderate struggle but insufficient confirming history - maintaining current difficulty"
            }
            Self::ConfirmedExcellenceStreak => {
                "Good performance confirmed by recent excellence streak - increasing difficulty by 1 level"
            }
            Self::PerfectScoreFastTrack => {
                "Perfect attempt on Easy (no errors, no hints, under 1 minute) - fast-tracking to Medium"
            }
            Self::ConsistencyUnproven => {
                "Good performance but consistency unproven - maintaining current difficulty"
            }
            Self::UnknownStatus => "Unknown status - maintaining current difficulty",
            Self::LegacySevereReset => "Student severely struggling - setting difficulty to Easy",
            Self::LegacyModerateStepDown => {
                "Student moderately struggling - decreasing difficulty by 1 level"
            }
            Self::LegacyExcellentJump => {
                "Excellent performance (Time < 2m, Low Errors) - Setting to HARD"
            }
            Self::LegacyGoodIncrease => "Good performance - Increasing difficulty",
            Self::LegacyStandardIncrease => {
                "Student performing well - increasing difficulty by 1 level"
            }
        }
    }
}

/// Outcome of one adjustment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentResult {
    pub previous_difficulty: DifficultyTier,
    pub new_difficulty: DifficultyTier,
    pub difficulty_changed: bool,
    pub irt_status: ReportedStatus,
    pub trend: TrendSignal,
    /// `index(new) - index(previous)`.
    pub adjustment: i32,
    pub reason: &'static str,
    /// Evaluation time; informational only.
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub rule: AdjustmentRule,
}

/// Starting tier for a learner with no difficulty history yet.
pub fn recommended_starting_difficulty(status: &ReportedStatus) -> DifficultyTier {
    match status {
        ReportedStatus::Known(StruggleStatus::SuperStruggling)
        | ReportedStatus::Known(StruggleStatus::MediumStruggling) => DifficultyTier::Easy,
        _ => DifficultyTier::Medium,
    }
}

/// Maps a verdict plus context onto a tier transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifficultyAdjuster {
    policy: AdjustmentPolicy,
}

impl DifficultyAdjuster {
    pub fn new(policy: AdjustmentPolicy) -> Self {
        Self { policy }
    }

    /// Decide the next tier. Missing metrics take worst-case values and a
    /// missing history is a stable trend.
    pub fn adjust(
        &self,
        status: &ReportedStatus,
        current: DifficultyTier,
        metrics: Option<&AttemptMetrics>,
        history: Option<&RecentHistory>,
    ) -> AdjustmentResult {
        let metrics = metrics.copied().unwrap_or_default();
        let trend = history.map(|h| h.trend).unwrap_or_default();

        let (rule, new_difficulty) = match self.policy {
            AdjustmentPolicy::TrendAware => decide_trend_aware(status, current, &metrics, trend),
            AdjustmentPolicy::Legacy => decide_legacy(status, current, &metrics),
        };

        debug!(
            policy = ?self.policy,
            ?rule,
            from = %current,
            to = %new_difficulty,
            "difficulty rule fired"
        );

        AdjustmentResult {
            previous_difficulty: current,
            new_difficulty,
            difficulty_changed: new_difficulty != current,
            irt_status: status.clone(),
            trend,
            adjustment: new_difficulty.index() - current.index(),
            reason: rule.reason(),
            timestamp: Utc::now(),
            rule,
        }
    }
}

fn decide_trend_aware(
    status: &ReportedStatus,
    current: DifficultyTier,
    metrics: &AttemptMetrics,
    trend: TrendSignal,
) -> (AdjustmentRule, DifficultyTier) {
    use StruggleStatus::*;

    match status {
        ReportedStatus::Known(SuperStruggling) => {
            (AdjustmentRule::SevereStruggleRescue, current.step(-1))
        }
        ReportedStatus::Known(MediumStruggling) if trend == TrendSignal::Struggling => {
            (AdjustmentRule::ConfirmedStruggleStreak, current.step(-1))
        }
        ReportedStatus::Known(MediumStruggling) => {
            (AdjustmentRule::InsufficientConfirmingHistory, current)
        }
        ReportedStatus::Known(NotStruggling) if trend == TrendSignal::Excelling => {
            (AdjustmentRule::ConfirmedExcellenceStreak, current.step(1))
        }
        ReportedStatus::Known(NotStruggling)
            if current == DifficultyTier::Easy && metrics.is_perfect_fast() =>
        {
            (AdjustmentRule::PerfectScoreFastTrack, DifficultyTier::Medium)
        }
        ReportedStatus::Known(NotStruggling) => (AdjustmentRule::ConsistencyUnproven, current),
        ReportedStatus::Unrecognized(_) => (AdjustmentRule::UnknownStatus, current),
    }
}

fn decide_legacy(
    status: &ReportedStatus,
    current: DifficultyTier,
    metrics: &AttemptMetrics,
) -> (AdjustmentRule, DifficultyTier) {
    use StruggleStatus::*;

    match status {
        ReportedStatus::Known(SuperStruggling) => {
            (AdjustmentRule::LegacySevereReset, DifficultyTier::Easy)
        }
        ReportedStatus::Known(MediumStruggling) => {
            (AdjustmentRule::LegacyModerateStepDown, current.step(-1))
        }
        ReportedStatus::Known(NotStruggling)
            if metrics.time < LEGACY_EXCELLENT_MAX_SECONDS
                && metrics.errors <= LEGACY_EXCELLENT_MAX_ERRORS
                && metrics.hints == 0 =>
        {
            (AdjustmentRule::LegacyExcellentJump, DifficultyTier::Hard)
        }
        ReportedStatus::Known(NotStruggling)
            if metrics.time < LEGACY_GOOD_MAX_SECONDS
                && metrics.errors <= LEGACY_GOOD_MAX_ERRORS
                && metrics.hints <= LEGACY_GOOD_MAX_HINTS =>
        {
            let at_least_medium = (current.index() + 1).max(DifficultyTier::Medium.index());
            (AdjustmentRule::LegacyGoodIncrease, DifficultyTier::from_index(at_least_medium))
        }
        ReportedStatus::Known(NotStruggling) => {
            (AdjustmentRule::LegacyStandardIncrease, current.step(1))
        }
        ReportedStatus::Unrecognized(_) => (AdjustmentRule::UnknownStatus, current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use DifficultyTier::*;

    fn known(status: StruggleStatus) -> ReportedStatus {
        ReportedStatus::Known(status)
    }

    fn trend(trend: TrendSignal) -> RecentHistory {
        RecentHistory::new(trend, 5)
    }

    fn trend_aware() -> DifficultyAdjuster {
        DifficultyAdjuster::default()
    }

    #[test]
    fn test_super_struggling_steps_down_one() {
        let result =
            trend_aware().adjust(&known(StruggleStatus::SuperStruggling), Hard, None, None);
        assert_eq!(result.new_difficulty, Medium);
        assert_eq!(result.adjustment, -1);
        assert!(result.difficulty_changed);
        assert_eq!(result.rule, AdjustmentRule::SevereStruggleRescue);
    }

    #[test]
    fn test_super_struggling_floors_at_easy() {
        let result =
            trend_aware().adjust(&known(StruggleStatus::SuperStruggling), Easy, None, None);
        assert_eq!(result.new_difficulty, Easy);
        assert_eq!(result.adjustment, 0);
        assert!(!result.difficulty_changed);
    }

    #[test]
    fn test_medium_struggling_with_streak_steps_down() {
        let history = trend(TrendSignal::Struggling);
        let result = trend_aware().adjust(
            &known(StruggleStatus::MediumStruggling),
            Medium,
            None,
            Some(&history),
        );
        assert_eq!(result.new_difficulty, Easy);
        assert_eq!(result.rule, AdjustmentRule::ConfirmedStruggleStreak);
        assert_eq!(result.trend, TrendSignal::Struggling);
    }

    #[test]
    fn test_medium_struggling_without_streak_holds() {
        let history = trend(TrendSignal::Stable);
        let result = trend_aware().adjust(
            &known(StruggleStatus::MediumStruggling),
            Medium,
            None,
            Some(&history),
        );
        assert_eq!(result.new_difficulty, Medium);
        assert_eq!(result.adjustment, 0);
        assert!(result.reason.contains("insufficient confirming history"));
    }

    #[test]
    fn test_medium_struggling_ignores_excelling_trend() {
        let history = trend(TrendSignal::Excelling);
        let result = trend_aware().adjust(
            &known(StruggleStatus::MediumStruggling),
            Hard,
            None,
            Some(&history),
        );
        assert_eq!(result.new_difficulty, Hard);
        assert_eq!(result.rule, AdjustmentRule::InsufficientConfirmingHistory);
    }

    #[test]
    fn test_excellence_streak_steps_up_with_ceiling() {
        let history = trend(TrendSignal::Excelling);
        let status = known(StruggleStatus::NotStruggling);

        let up = trend_aware().adjust(&status, Medium, None, Some(&history));
        assert_eq!(up.new_difficulty, Hard);
        assert_eq!(up.adjustment, 1);

        let capped = trend_aware().adjust(&status, Hard, None, Some(&history));
        assert_eq!(capped.new_difficulty, Hard);
        assert_eq!(capped.rule, AdjustmentRule::ConfirmedExcellenceStreak);
    }

    #[test]
    fn test_excellence_streak_beats_fast_track() {
        let history = trend(TrendSignal::Excelling);
        let metrics = AttemptMetrics::new(30.0, 0, 0);
        let result = trend_aware().adjust(
            &known(StruggleStatus::NotStruggling),
            Easy,
            Some(&metrics),
            Some(&history),
        );
        assert_eq!(result.rule, AdjustmentRule::ConfirmedExcellenceStreak);
        assert_eq!(result.new_difficulty, Medium);
    }

    #[test]
    fn test_perfect_attempt_fast_tracks_off_easy() {
        let metrics = AttemptMetrics::new(30.0, 0, 0);
        let history = trend(TrendSignal::Stable);
        let result = trend_aware().adjust(
            &known(StruggleStatus::NotStruggling),
            Easy,
            Some(&metrics),
            Some(&history),
        );
        assert_eq!(result.new_difficulty, Medium);
        assert_eq!(result.adjustment, 1);
        assert_eq!(result.rule, AdjustmentRule::PerfectScoreFastTrack);
    }

    #[test]
    fn test_fast_track_applies_even_with_struggling_trend() {
        let metrics = AttemptMetrics::new(59.9, 0, 0);
        let history = trend(TrendSignal::Struggling);
        let result = trend_aware().adjust(
            &known(StruggleStatus::NotStruggling),
            Easy,
            Some(&metrics),
            Some(&history),
        );
        assert_eq!(result.rule, AdjustmentRule::PerfectScoreFastTrack);
    }

    #[test]
    fn test_fast_track_requires_every_condition() {
        let status = known(StruggleStatus::NotStruggling);
        for metrics in [
            AttemptMetrics::new(60.0, 0, 0),
            AttemptMetrics::new(30.0, 1, 0),
            AttemptMetrics::new(30.0, 0, 1),
        ] {
            let result = trend_aware().adjust(&status, Easy, Some(&metrics), None);
            assert_eq!(result.rule, AdjustmentRule::ConsistencyUnproven);
            assert_eq!(result.new_difficulty, Easy);
        }

        // Only applies from Easy.
        let perfect = AttemptMetrics::new(10.0, 0, 0);
        let result = trend_aware().adjust(&status, Medium, Some(&perfect), None);
        assert_eq!(result.rule, AdjustmentRule::ConsistencyUnproven);
    }

    #[test]
    fn test_missing_metrics_never_fast_track() {
        let result = trend_aware().adjust(&known(StruggleStatus::NotStruggling), Easy, None, None);
        assert_eq!(result.new_difficulty, Easy);
        assert_eq!(result.rule, AdjustmentRule::ConsistencyUnproven);
        assert_eq!(result.trend, TrendSignal::Stable);
    }

    #[test]
    fn test_unknown_status_holds_and_echoes() {
        let status = ReportedStatus::parse("Confused");
        let result = trend_aware().adjust(&status, Hard, None, None);
        assert_eq!(result.new_difficulty, Hard);
        assert_eq!(result.rule, AdjustmentRule::UnknownStatus);
        assert_eq!(result.irt_status.as_str(), "Confused");
    }

    #[test]
    fn test_unknown_current_difficulty_is_medium() {
        let current = DifficultyTier::parse_lenient("Extreme");
        let result =
            trend_aware().adjust(&known(StruggleStatus::SuperStruggling), current, None, None);
        assert_eq!(result.previous_difficulty, Medium);
        assert_eq!(result.new_difficulty, Easy);
        assert_eq!(result.adjustment, -1);
    }

    #[test]
    fn test_metrics_partial_defaults() {
        let metrics: AttemptMetrics = serde_json::from_str(r#"{"time": 20}"#).unwrap();
        assert_eq!(metrics.time, 20.0);
        assert_eq!(metrics.errors, 99);
        assert_eq!(metrics.hints, 99);
        assert_eq!(AttemptMetrics::default(), AttemptMetrics::new(999.0, 99, 99));
    }

    #[test]
    fn test_result_wire_shape() {
        let result =
            trend_aware().adjust(&known(StruggleStatus::SuperStruggling), Hard, None, None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["previous_difficulty"], "Hard");
        assert_eq!(json["new_difficulty"], "Medium");
        assert_eq!(json["difficulty_changed"], true);
        assert_eq!(json["irt_status"], "SuperStruggling");
        assert_eq!(json["trend"], "stable");
        assert_eq!(json["adjustment"], -1);
        assert!(json["reason"].is_string());
        assert!(json["timestamp"].is_string());
        assert!(json.get("rule").is_none());
    }

    #[test]
    fn test_legacy_super_resets_to_easy() {
        let legacy = DifficultyAdjuster::new(AdjustmentPolicy::Legacy);
        let result = legacy.adjust(&known(StruggleStatus::SuperStruggling), Hard, None, None);
        assert_eq!(result.new_difficulty, Easy);
        assert_eq!(result.adjustment, -2);
        assert_eq!(result.rule, AdjustmentRule::LegacySevereReset);
    }

    #[test]
    fn test_legacy_medium_steps_down_without_trend() {
        let legacy = DifficultyAdjuster::new(AdjustmentPolicy::Legacy);
        let result = legacy.adjust(&known(StruggleStatus::MediumStruggling), Hard, None, None);
        assert_eq!(result.new_difficulty, Medium);
    }

    #[test]
    fn test_legacy_not_struggling_branches() {
        let legacy = DifficultyAdjuster::new(AdjustmentPolicy::Legacy);
        let status = known(StruggleStatus::NotStruggling);

        let excellent = AttemptMetrics::new(100.0, 2, 0);
        let result = legacy.adjust(&status, Easy, Some(&excellent), None);
        assert_eq!(result.rule, AdjustmentRule::LegacyExcellentJump);
        assert_eq!(result.new_difficulty, Hard);

        let good = AttemptMetrics::new(200.0, 4, 1);
        let result = legacy.adjust(&status, Easy, Some(&good), None);
        assert_eq!(result.rule, AdjustmentRule::LegacyGoodIncrease);
        assert_eq!(result.new_difficulty, Medium);

        let result = legacy.adjust(&status, Hard, Some(&good), None);
        assert_eq!(result.new_difficulty, Hard);

        let result = legacy.adjust(&status, Easy, None, None);
        assert_eq!(result.rule, AdjustmentRule::LegacyStandardIncrease);
        assert_eq!(result.new_difficulty, Medium);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("legacy".parse::<AdjustmentPolicy>().unwrap(), AdjustmentPolicy::Legacy);
        assert_eq!(
            "trend-aware".parse::<AdjustmentPolicy>().unwrap(),
            AdjustmentPolicy::TrendAware
        );
        assert!("aggressive".parse::<AdjustmentPolicy>().is_err());
    }

    #[test]
    fn test_recommended_starting_difficulty() {
        assert_eq!(
            recommended_starting_difficulty(&known(StruggleStatus::SuperStruggling)),
            Easy
        );
        assert_eq!(
            recommended_starting_difficulty(&known(StruggleStatus::MediumStruggling)),
            Easy
        );
        assert_eq!(
            recommended_starting_difficulty(&known(StruggleStatus::NotStruggling)),
            Medium
        );
        assert_eq!(recommended_starting_difficulty(&ReportedStatus::parse("???")), Medium);
    }

    fn any_status() -> impl Strategy<Value = ReportedStatus> {
        prop_oneof![
            Just(known(StruggleStatus::NotStruggling)),
            Just(known(StruggleStatus::MediumStruggling)),
            Just(known(StruggleStatus::SuperStruggling)),
            "[A-Za-z]{0,12}".prop_map(|s| ReportedStatus::parse(&s)),
        ]
    }

    fn any_tier() -> impl Strategy<Value = DifficultyTier> {
        prop_oneof![Just(Easy), Just(Medium), Just(Hard)]
    }

    fn any_trend() -> impl Strategy<Value = Option<RecentHistory>> {
        prop_oneof![
            Just(None),
            Just(Some(trend(TrendSignal::Stable))),
            Just(Some(trend(TrendSignal::Struggling))),
            Just(Some(trend(TrendSignal::Excelling))),
        ]
    }

    fn any_metrics() -> impl Strategy<Value = Option<AttemptMetrics>> {
        proptest::option::of(
            (0.0f64..1000.0, 0u32..20, 0u32..10)
                .prop_map(|(time, errors, hints)| AttemptMetrics::new(time, errors, hints)),
        )
    }

    proptest! {
        #[test]
        fn prop_trend_aware_moves_at_most_one_tier(
            status in any_status(),
            current in any_tier(),
            metrics in any_metrics(),
            history in any_trend(),
        ) {
            let result = trend_aware().adjust(&status, current, metrics.as_ref(), history.as_ref());
            prop_assert!(result.adjustment.abs() <= 1);
            prop_assert_eq!(result.adjustment, result.new_difficulty.index() - current.index());
            prop_assert_eq!(result.difficulty_changed, result.new_difficulty != current);
        }

        #[test]
        fn prop_adjustment_is_deterministic(
            status in any_status(),
            current in any_tier(),
            metrics in any_metrics(),
            history in any_trend(),
            legacy in any::<bool>(),
        ) {
            let policy = if legacy {
                AdjustmentPolicy::Legacy
            } else {
                AdjustmentPolicy::TrendAware
            };
            let adjuster = DifficultyAdjuster::new(policy);
            let a = adjuster.adjust(&status, current, metrics.as_ref(), history.as_ref());
            let b = adjuster.adjust(&status, current, metrics.as_ref(), history.as_ref());
            prop_assert_eq!(a.new_difficulty, b.new_difficulty);
            prop_assert_eq!(a.adjustment, b.adjustment);
            prop_assert_eq!(a.reason, b.reason);
            prop_assert_eq!(a.difficulty_changed, b.difficulty_changed);
        }

        #[test]
        fn prop_legacy_stays_in_range(
            status in any_status(),
            current in any_tier(),
            metrics in any_metrics(),
        ) {
            let legacy = DifficultyAdjuster::new(AdjustmentPolicy::Legacy);
            let result = legacy.adjust(&status, current, metrics.as_ref(), None);
            prop_assert!((0..=2).contains(&result.new_difficulty.index()));
            prop_assert!(result.adjustment.abs() <= 2);
        }
    }
}
