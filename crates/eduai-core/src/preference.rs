//! Learner preferences and their persistence seam.
//!
//! The one value that survives a restart is the learner's difficulty
//! preference. It is stored through the [`PreferenceRepository`] trait;
//! loss of the stored value is non-fatal and falls back to the default.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The learner's difficulty preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyLevel {
    Beginner,
    #[default]
    Intermediate,
    InterviewPrep,
}

impl DifficultyLevel {
    /// All levels, in the order the personalization panel offers them.
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::InterviewPrep,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::InterviewPrep => "Interview-Prep",
        }
    }

    /// Parses a display label; `None` for an unknown label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Preferences that persist across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerPreferences {
    /// The chosen difficulty level.
    #[serde(default)]
    pub difficulty: DifficultyLevel,
}

impl LearnerPreferences {
    /// Creates preferences with the default difficulty.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Repository for persisting learner preferences.
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Loads the stored preferences, or defaults when nothing usable is
    /// stored.
    async fn load(&self) -> Result<LearnerPreferences>;

    /// Saves the preferences to storage.
    async fn save(&self, preferences: &LearnerPreferences) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_difficulty_is_intermediate() {
        assert_eq!(
            LearnerPreferences::new().difficulty,
            DifficultyLevel::Intermediate
        );
    }

    #[test]
    fn test_label_round_trip() {
        for level in DifficultyLevel::ALL {
            assert_eq!(DifficultyLevel::from_label(level.label()), Some(level));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(DifficultyLevel::from_label("Expert"), None);
    }
}
