//! Section routing.
//!
//! The client shows exactly one top-level section at a time. The router owns
//! the identifier of the active section and exposes the navigation
//! transition. Navigation has no side effects beyond replacing the active
//! section and is idempotent when the same section is requested again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EduError;

/// One of the mutually-exclusive top-level views the user can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Progress overview, quick actions, and the avatar panel.
    Dashboard,
    /// Course explorer with the avatar panel.
    Learn,
    /// Coding assignment with editor and run output.
    Assignments,
    /// Tutor chat with the avatar panel.
    Chat,
    /// Learner progress and personalization.
    Profile,
}

impl Section {
    /// All sections, in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Learn,
        Section::Assignments,
        Section::Chat,
        Section::Profile,
    ];

    /// Returns the stable label used at the rendering boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Learn => "learn",
            Section::Assignments => "assignments",
            Section::Chat => "chat",
            Section::Profile => "profile",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = EduError;

    /// Parses a section label coming from an untyped caller.
    ///
    /// # Errors
    ///
    /// Returns `EduError::InvalidSection` for anything outside the closed
    /// set. Inside the typed API invalid sections are unrepresentable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Section::Dashboard),
            "learn" => Ok(Section::Learn),
            "assignments" => Ok(Section::Assignments),
            "chat" => Ok(Section::Chat),
            "profile" => Ok(Section::Profile),
            other => Err(EduError::InvalidSection(other.to_string())),
        }
    }
}

/// Holds the currently active section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRouter {
    active: Section,
}

impl SectionRouter {
    /// Creates a router starting at the given section.
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    /// Returns the active section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Replaces the active section.
    pub fn navigate(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "navigate");
        }
        self.active = section;
    }
}

impl Default for SectionRouter {
    /// The client opens on the learning hub.
    fn default() -> Self {
        Self::new(Section::Learn)
    }
}
