//! TOML-backed preference storage.
//!
//! The difficulty preference is read once on load and written on every
//! change. Loss of the file is non-fatal: a missing or unreadable file
//! yields the defaults.

use std::path::PathBuf;

use async_trait::async_trait;

use eduai_core::error::{EduError, Result};
use eduai_core::preference::{LearnerPreferences, PreferenceRepository};

/// Persists [`LearnerPreferences`] as a TOML file.
#[derive(Debug, Clone)]
pub struct TomlPreferenceRepository {
    path: PathBuf,
}

impl TomlPreferenceRepository {
    /// Creates a repository at the platform config location
    /// (`<config_dir>/eduai/preferences.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error when the platform config directory cannot be
    /// determined.
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EduError::internal("Cannot determine config directory"))?;
        Ok(Self {
            path: config_dir.join("eduai").join("preferences.toml"),
        })
    }

    /// Creates a repository at a specific file path. Used in tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl PreferenceRepository for TomlPreferenceRepository {
    /// Loads the stored preferences.
    ///
    /// A missing file yields the defaults. An unparsable file also yields
    /// the defaults, with a warning; the stored value is a preference, not
    /// data worth failing over.
    async fn load(&self) -> Result<LearnerPreferences> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no preference file, using defaults");
                return Ok(LearnerPreferences::default());
            }
            Err(err) => return Err(err.into()),
        };

        match toml::from_str(&contents) {
            Ok(preferences) => Ok(preferences),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable preference file, using defaults"
                );
                Ok(LearnerPreferences::default())
            }
        }
    }

    /// Saves the preferences, creating the parent directory if needed.
    async fn save(&self, preferences: &LearnerPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = toml::to_string_pretty(preferences)?;
        tokio::fs::write(&self.path, contents).await?;
        tracing::debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }
}
