//! Session timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for the session controller.
///
/// The defaults mirror the client's behavior: the teaching overlay clears
/// itself after 8 seconds, and both simulated backends answer after 2
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// How long the teaching overlay stays up, in milliseconds.
    #[serde(default = "default_overlay_ttl_ms")]
    pub overlay_ttl_ms: u64,
    /// Artificial latency of the canned backends, in milliseconds.
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,
}

fn default_overlay_ttl_ms() -> u64 {
    8_000
}

fn default_response_delay_ms() -> u64 {
    2_000
}

impl SessionConfig {
    /// Returns the overlay lifetime as a [`Duration`].
    pub fn overlay_ttl(&self) -> Duration {
        Duration::from_millis(self.overlay_ttl_ms)
    }

    /// Returns the simulated backend latency as a [`Duration`].
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            overlay_ttl_ms: default_overlay_ttl_ms(),
            response_delay_ms: default_response_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.overlay_ttl(), Duration::from_secs(8));
        assert_eq!(config.response_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SessionConfig = toml::from_str("overlay_ttl_ms = 500").unwrap();
        assert_eq!(config.overlay_ttl(), Duration::from_millis(500));
        assert_eq!(config.response_delay(), Duration::from_secs(2));
    }
}
