//! Canned backend implementations.
//!
//! Both mocks always succeed, after a fixed artificial delay, with a
//! deterministic result derived from nothing but the built-in script. They
//! stand in for the real grading and chat endpoints during development and
//! in tests.

use std::time::Duration;

use async_trait::async_trait;

use eduai_core::assignment::RunReport;

use crate::{BackendError, CodeRunner, TutorBackend};

/// Artificial latency both mocks apply by default.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// The canned tutor explanation.
pub const CANNED_TUTOR_REPLY: &str = "That's a great question! Let me break it down for you:\n\n\
     1. **Time Complexity**: This refers to how the runtime grows as input size increases.\n\
     2. **Space Complexity**: This measures additional memory usage.\n\n\
     For arrays, accessing an element is O(1), while searching unsorted arrays is O(n). \
     Would you like me to explain any specific algorithm?";

/// Code grader that replies with a fixed success report.
#[derive(Debug, Clone)]
pub struct CannedCodeRunner {
    delay: Duration,
}

impl CannedCodeRunner {
    /// Creates a runner with the default artificial delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Creates a runner with a specific artificial delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The fixed grading report.
    pub fn canned_report() -> RunReport {
        RunReport {
            compiled: true,
            tests_passed: 8,
            tests_total: 10,
            time_complexity: "O(n) - Good!".to_string(),
            space_complexity: "O(1) - Excellent!".to_string(),
            output: vec![
                "Array: [5, 4, 3, 2, 1]".to_string(),
                "Reversed successfully!".to_string(),
            ],
            feedback: "Great work! Consider edge cases like empty arrays.".to_string(),
        }
    }
}

impl Default for CannedCodeRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRunner for CannedCodeRunner {
    async fn run(&self, source: &str) -> Result<RunReport, BackendError> {
        tracing::debug!(bytes = source.len(), "mock grader received submission");
        tokio::time::sleep(self.delay).await;
        Ok(Self::canned_report())
    }
}

/// Tutor that replies with a fixed explanation.
#[derive(Debug, Clone)]
pub struct CannedTutor {
    delay: Duration,
}

impl CannedTutor {
    /// Creates a tutor with the default artificial delay.
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Creates a tutor with a specific artificial delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CannedTutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TutorBackend for CannedTutor {
    async fn reply(&self, prompt: &str) -> Result<String, BackendError> {
        tracing::debug!(chars = prompt.len(), "mock tutor received prompt");
        tokio::time::sleep(self.delay).await;
        Ok(CANNED_TUTOR_REPLY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_canned_runner_reports_after_delay() {
        let runner = CannedCodeRunner::new();
        let started = tokio::time::Instant::now();
        let report = runner.run("int main() {}").await.unwrap();
        assert_eq!(started.elapsed(), DEFAULT_DELAY);
        assert!(report.compiled);
        assert_eq!(report.tests_passed, 8);
        assert_eq!(report.tests_total, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_canned_tutor_reply_is_deterministic() {
        let tutor = CannedTutor::with_delay(Duration::from_millis(10));
        let first = tutor.reply("what is big O?").await.unwrap();
        let second = tutor.reply("explain arrays").await.unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Time Complexity"));
    }
}
