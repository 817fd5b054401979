//! Historical proficiency lookup.
//!
//! The classifier records the learner's level at the time of the attempt. The
//! level comes from an external profile store and is best-effort: every
//! failure mode collapses to [`LevelLookup::Unavailable`], whose
//! [`LevelLookup::level`] is [`DEFAULT_STUDENT_LEVEL`].

pub mod rest;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

pub use rest::RestProfileSource;

/// Level reported when no profile row can be read.
pub const DEFAULT_STUDENT_LEVEL: i64 = 1;

/// One row of the `users` table, restricted to the selected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub xp: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserProfile {
    pub fn with_level(level: i64) -> Self {
        Self {
            level: Some(level),
            ..Default::default()
        }
    }
}

/// Outcome of a profile read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelLookup {
    Found(UserProfile),
    Unavailable(LookupError),
}

impl LevelLookup {
    /// Proficiency level to record, falling back to [`DEFAULT_STUDENT_LEVEL`]
    /// when the lookup failed or the row has no level.
    pub fn level(&self) -> i64 {
        match self {
            LevelLookup::Found(profile) => profile.level.unwrap_or(DEFAULT_STUDENT_LEVEL),
            LevelLookup::Unavailable(_) => DEFAULT_STUDENT_LEVEL,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, LevelLookup::Found(_))
    }
}

impl From<Result<UserProfile, LookupError>> for LevelLookup {
    fn from(result: Result<UserProfile, LookupError>) -> Self {
        match result {
            Ok(profile) => LevelLookup::Found(profile),
            Err(err) => LevelLookup::Unavailable(err),
        }
    }
}

/// Read-only source of learner profiles keyed by user id.
///
/// Implementations never fail: errors are reported through
/// [`LevelLookup::Unavailable`].
pub trait ProfileSource: Send + Sync {
    fn fetch_profile(&self, user_id: &str) -> impl Future<Output = LevelLookup> + Send;
}

/// Always answers with the same profile.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    profile: UserProfile,
}

impl StaticProfileSource {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile }
    }
}

impl ProfileSource for StaticProfileSource {
    async fn fetch_profile(&self, _user_id: &str) -> LevelLookup {
        LevelLookup::Found(self.profile.clone())
    }
}

/// Source used when no profile store is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProfileSource;

impl ProfileSource for OfflineProfileSource {
    async fn fetch_profile(&self, _user_id: &str) -> LevelLookup {
        LevelLookup::Unavailable(LookupError::MissingCredentials)
    }
}
