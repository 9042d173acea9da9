//! Simulated backend collaborators.
//!
//! The orchestration core talks to two backends: a code grader and a tutor.
//! Their contract is deliberately thin: send one request payload, receive
//! exactly one response, success or failure, after unbounded latency.
//! Single-flight and staleness handling stay on the caller's side
//! (`eduai_core::operation`), so a real integration can replace the canned
//! implementations here without touching the orchestration discipline.

pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use eduai_core::EduError;
use eduai_core::assignment::RunReport;

/// Error returned by a backend collaborator.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    /// The backend could not be reached or refused the request.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something unusable.
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

impl From<BackendError> for EduError {
    fn from(err: BackendError) -> Self {
        EduError::backend(err.to_string())
    }
}

/// Grades submitted code and produces a run report.
#[async_trait]
pub trait CodeRunner: Send + Sync {
    /// Runs the submitted source and returns the grading report.
    async fn run(&self, source: &str) -> Result<RunReport, BackendError>;
}

/// Answers learner questions.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Produces the tutor's reply to a learner prompt.
    async fn reply(&self, prompt: &str) -> Result<String, BackendError>;
}
