//! Puzzle difficulty tiers.
//!
//! Tiers are totally ordered `Easy < Medium < Hard` and carried internally as
//! an index in `0..=2`. Every transition goes through [`DifficultyTier::from_index`]
//! or [`DifficultyTier::step`], which clamp, so no adjustment can leave the range.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Index of the lowest tier.
pub const MIN_TIER_INDEX: i32 = 0;

/// Index of the highest tier.
pub const MAX_TIER_INDEX: i32 = 2;

/// One of three ordered puzzle difficulty settings.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyTier {
    /// All tiers, easiest first.
    pub const ALL: [DifficultyTier; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Position of this tier in the ordering (Easy = 0).
    pub fn index(self) -> i32 {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    /// Tier at `index`, clamped to `[Easy, Hard]`.
    pub fn from_index(index: i32) -> Self {
        match index.clamp(MIN_TIER_INDEX, MAX_TIER_INDEX) {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Move `delta` tiers, stopping at the floor or ceiling.
    pub fn step(self, delta: i32) -> Self {
        Self::from_index(self.index() + delta)
    }

    /// Lenient parse used at the boundary: anything that is not exactly
    /// `Easy`, `Medium` or `Hard` becomes `Medium`.
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown names are a soft default, never a deserialization error.
impl<'de> Deserialize<'de> for DifficultyTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}
