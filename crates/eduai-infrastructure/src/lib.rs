//! Storage implementations for the EduAI core.
//!
//! Currently one concern lives here: persisting the learner's difficulty
//! preference as a TOML file.

mod preference_repository;

pub use preference_repository::TomlPreferenceRepository;
