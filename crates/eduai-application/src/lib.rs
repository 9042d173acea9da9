//! Session orchestration for the EduAI learning client.
//!
//! [`LearningSession`] is the single controller that owns all mutable
//! session state and drives the two kinds of timers: the teaching overlay's
//! auto-expiry and the simulated latency of the backend call sites. The
//! rendering collaborator calls into it on user actions and reads back a
//! [`eduai_core::view::ViewModel`] through [`LearningSession::view`].

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::LearningSession;
