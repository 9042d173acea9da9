//! Domain models and pure state machines for the EduAI learning client.
//!
//! This crate holds everything that mutates or describes session state
//! without touching timers, I/O, or a rendering technology:
//!
//! - `router`: the active top-level section and navigation
//! - `overlay`: the auto-expiring teaching overlay state
//! - `operation`: the generic single-flight async operation state machine
//! - `transcript`: the append-only tutor chat transcript
//! - `catalog`: the built-in course and its modules
//! - `assignment`: the coding assignment and its run report
//! - `progress`: learner progress sample data for the dashboard
//! - `preference`: the persisted learner preference and its repository trait
//! - `view`: the pure view composition read path
//!
//! The timing half of the overlay and of the async operations lives in
//! `eduai-application`, which drives these state machines from tokio tasks.

pub mod assignment;
pub mod catalog;
pub mod error;
pub mod operation;
pub mod overlay;
pub mod preference;
pub mod progress;
pub mod router;
pub mod transcript;
pub mod view;

// Re-export common error type
pub use error::{EduError, Result};
