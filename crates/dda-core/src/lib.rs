//! # DDA Core Library
//!
//! Dynamic difficulty adjustment for interactive puzzles. Each attempt goes
//! through two stateless stages:
//!
//! 1. **Struggle classification**: time, error and hint telemetry is compared
//!    against fixed Medium/Super thresholds. A severity is assigned only when
//!    at least two dimensions reach it. The learner's current level is read
//!    from an external profile store for the audit record; the read is
//!    best-effort and falls back to level 1.
//! 2. **Difficulty adjustment**: the verdict, the current tier, the attempt
//!    metrics and an optional recent-trend signal select the next tier.
//!
//! The CLI-first wrapper lives in `dda-cli`; this crate has no process or
//! environment plumbing beyond [`Config`].
//!
//! ## Key Components
//!
//! - [`StruggleClassifier`]: telemetry to [`StruggleStatus`]
//! - [`DifficultyAdjuster`]: status plus context to a [`DifficultyTier`] transition
//! - [`ProfileSource`]: historical level lookup, with [`RestProfileSource`] for
//!   the REST data endpoint
//! - [`Config`]: TOML configuration and credential resolution

pub mod adjuster;
pub mod classifier;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod pipeline;
pub mod profile;
pub mod trend;

pub use adjuster::{
    recommended_starting_difficulty, AdjustmentPolicy, AdjustmentResult, AdjustmentRule,
    AttemptMetrics, DifficultyAdjuster, ReportedStatus,
};
pub use classifier::{
    AttemptTelemetry, ClassificationReport, StruggleClassifier, StruggleStatus, StruggleVerdict,
};
pub use config::{Config, ProfileStoreSettings};
pub use difficulty::DifficultyTier;
pub use error::{ConfigError, CoreError, LookupError, ValidationError};
pub use pipeline::{analyze_attempt, AnalysisSummary, FullAnalysis};
pub use profile::{
    LevelLookup, OfflineProfileSource, ProfileSource, RestProfileSource, StaticProfileSource,
    UserProfile,
};
pub use trend::{RecentHistory, TrendSignal};
