//! Teaching overlay state.
//!
//! The overlay is the ephemeral "the tutor is teaching" banner shown next to
//! the avatar when a lesson starts. It carries a message and clears itself
//! after a fixed duration. The timer itself lives in `eduai-application`;
//! this module owns the state transitions and the staleness discipline.
//!
//! Every activation bumps a generation counter, and an expiry callback must
//! present the generation it was scheduled for. A timer scheduled by an
//! earlier activation therefore can never clear a message set by a later
//! one, even if its cancellation raced with the replacement.

use serde::{Deserialize, Serialize};

use crate::error::{EduError, Result};

/// State of the auto-expiring teaching overlay.
///
/// Invariant: `message` is non-empty exactly when `active` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingOverlay {
    /// Whether the overlay is currently shown.
    active: bool,
    /// The message shown while active; empty while inactive.
    message: String,
    /// Bumped on every activation; stamps expiry timers.
    generation: u64,
}

impl TeachingOverlay {
    /// Creates an inactive overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the overlay is shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current message, or an empty string while inactive.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the generation of the latest activation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Activates the overlay with a message, superseding any prior
    /// activation.
    ///
    /// Returns the new generation. The caller is expected to cancel the
    /// previous expiry timer and schedule a replacement stamped with this
    /// generation.
    ///
    /// # Errors
    ///
    /// Returns `EduError::EmptyOverlayMessage` when the message is empty,
    /// which would break the active-implies-message invariant.
    pub fn activate(&mut self, message: impl Into<String>) -> Result<u64> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(EduError::EmptyOverlayMessage);
        }

        self.generation += 1;
        self.active = true;
        self.message = message;
        tracing::debug!(generation = self.generation, "overlay activated");
        Ok(self.generation)
    }

    /// Deactivates the overlay and clears the message.
    ///
    /// A no-op when already inactive.
    pub fn deactivate(&mut self) {
        if self.active {
            tracing::debug!(generation = self.generation, "overlay deactivated");
        }
        self.active = false;
        self.message.clear();
    }

    /// Expiry entry point for timers.
    ///
    /// Deactivates only when `generation` still matches the latest
    /// activation; a stale timer is ignored. Returns whether the overlay was
    /// cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "ignoring stale overlay expiry"
            );
            return false;
        }
        self.deactivate();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive_and_empty() {
        let overlay = TeachingOverlay::new();
        assert!(!overlay.is_active());
        assert_eq!(overlay.message(), "");
    }

    #[test]
    fn test_activate_sets_message() {
        let mut overlay = TeachingOverlay::new();
        overlay.activate("Let's explore Arrays").unwrap();
        assert!(overlay.is_active());
        assert_eq!(overlay.message(), "Let's explore Arrays");
    }

    #[test]
    fn test_activate_rejects_empty_message() {
        let mut overlay = TeachingOverlay::new();
        let err = overlay.activate("   ").unwrap_err();
        assert!(matches!(err, EduError::EmptyOverlayMessage));
        assert!(!overlay.is_active());
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut overlay = TeachingOverlay::new();
        overlay.activate("message").unwrap();
        overlay.deactivate();
        let cleared = overlay.clone();
        overlay.deactivate();
        assert_eq!(overlay, cleared);
        assert!(!overlay.is_active());
        assert_eq!(overlay.message(), "");
    }

    #[test]
    fn test_stale_expiry_does_not_clear_newer_message() {
        let mut overlay = TeachingOverlay::new();
        let first = overlay.activate("first").unwrap();
        let _second = overlay.activate("second").unwrap();

        // Timer from the first activation fires late.
        assert!(!overlay.expire(first));
        assert!(overlay.is_active());
        assert_eq!(overlay.message(), "second");
    }

    #[test]
    fn test_current_expiry_clears() {
        let mut overlay = TeachingOverlay::new();
        let generation = overlay.activate("message").unwrap();
        assert!(overlay.expire(generation));
        assert!(!overlay.is_active());
        assert_eq!(overlay.message(), "");
    }

    #[test]
    fn test_reactivation_supersedes() {
        let mut overlay = TeachingOverlay::new();
        let g1 = overlay.activate("one").unwrap();
        let g2 = overlay.activate("two").unwrap();
        assert!(g2 > g1);
        assert_eq!(overlay.message(), "two");
    }
}
