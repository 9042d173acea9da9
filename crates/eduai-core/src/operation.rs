//! Single-flight async operation state machine.
//!
//! Both simulated backend call sites (code execution, tutor reply) share the
//! same discipline: at most one request is in flight per call site, a new
//! submission supersedes the outstanding one, and a completion is applied
//! only when the token it carries is still the current one. Superseded
//! completions are discarded silently; they are expected, not errors.
//!
//! There is no hard cancellation. A superseded timer still fires, presents
//! its stale token, and its effect is suppressed here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque per-request identifier used to detect superseded completions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(Uuid);

impl RequestToken {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Observable state of one call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationState<T> {
    /// No request has been submitted, or the call site was reset.
    Idle,
    /// A request is in flight.
    Pending,
    /// The latest request completed successfully.
    Resolved { result: T },
    /// The latest request failed. The call site accepts a fresh submit.
    Failed { message: String },
}

/// A single-flight asynchronous operation for one call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsyncOperation<T> {
    state: OperationState<T>,
    /// Token of the in-flight request, if any. Completions carrying any
    /// other token are stale and ignored.
    current: Option<RequestToken>,
}

impl<T> AsyncOperation<T> {
    /// Creates an idle operation.
    pub fn new() -> Self {
        Self {
            state: OperationState::Idle,
            current: None,
        }
    }

    /// Returns the observable state.
    pub fn state(&self) -> &OperationState<T> {
        &self.state
    }

    /// Returns whether a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, OperationState::Pending)
    }

    /// Submits a new request, superseding any in-flight one.
    ///
    /// Transitions to `Pending` and returns the token the eventual
    /// completion must present. A pending-to-pending transition is allowed;
    /// it invalidates the previous token.
    pub fn begin(&mut self) -> RequestToken {
        let token = RequestToken::new();
        if self.current.is_some() {
            tracing::debug!("superseding in-flight request");
        }
        self.current = Some(token);
        self.state = OperationState::Pending;
        token
    }

    /// Applies a successful completion.
    ///
    /// Returns `true` and transitions to `Resolved` when `token` is still
    /// current. Returns `false` without mutating anything when the request
    /// was superseded.
    pub fn complete(&mut self, token: RequestToken, result: T) -> bool {
        if self.current != Some(token) {
            tracing::debug!("discarding stale completion");
            return false;
        }
        self.current = None;
        self.state = OperationState::Resolved { result };
        true
    }

    /// Applies a failed completion.
    ///
    /// Same staleness rule as [`complete`](Self::complete). After a failure
    /// the call site remains able to accept a fresh [`begin`](Self::begin).
    pub fn fail(&mut self, token: RequestToken, message: impl Into<String>) -> bool {
        if self.current != Some(token) {
            tracing::debug!("discarding stale failure");
            return false;
        }
        self.current = None;
        self.state = OperationState::Failed {
            message: message.into(),
        };
        true
    }

    /// Returns the call site to `Idle`, invalidating any in-flight token.
    pub fn reset(&mut self) {
        self.current = None;
        self.state = OperationState::Idle;
    }
}

impl<T> Default for AsyncOperation<T> {
    fn default() -> Self {
        Self::new()
    }
}
