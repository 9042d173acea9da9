//! The learning session controller.
//!
//! One `LearningSession` holds all state of one browser-session equivalent:
//! the active section, the teaching overlay, the two backend call sites,
//! the chat transcript, the lesson selection, and the learner preferences.
//! All mutation flows through `&self` methods or through the timer tasks
//! they spawn; no state is shared with any other component.
//!
//! Two invariants this controller exists to guarantee:
//!
//! - The overlay's expiry timer is cancelled before a replacement is
//!   scheduled, and the expiry callback carries the activation generation,
//!   so an old timer can never clear a newer message.
//! - Each call site applies a completion only when its request token is
//!   still current, so a superseded request can never overwrite the result
//!   of a later one, regardless of timer firing order.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use eduai_core::Result;
use eduai_core::assignment::{Assignment, RunReport};
use eduai_core::catalog::{Course, CourseModule};
use eduai_core::operation::AsyncOperation;
use eduai_core::overlay::TeachingOverlay;
use eduai_core::preference::{DifficultyLevel, LearnerPreferences, PreferenceRepository};
use eduai_core::progress::ProgressSnapshot;
use eduai_core::router::{Section, SectionRouter};
use eduai_core::transcript::ChatTranscript;
use eduai_core::view::{SessionSnapshot, ViewModel, compose};
use eduai_interaction::mock::{CannedCodeRunner, CannedTutor};
use eduai_interaction::{CodeRunner, TutorBackend};

use crate::config::SessionConfig;

/// Orchestrates one learning session.
pub struct LearningSession {
    config: SessionConfig,
    router: Arc<RwLock<SectionRouter>>,
    overlay: Arc<Mutex<TeachingOverlay>>,
    /// Handle of the pending overlay expiry task, if any. Aborted before a
    /// replacement is scheduled (cancel-before-schedule).
    overlay_expiry: Arc<Mutex<Option<JoinHandle<()>>>>,
    code_run: Arc<Mutex<AsyncOperation<RunReport>>>,
    chat_reply: Arc<Mutex<AsyncOperation<String>>>,
    transcript: Arc<Mutex<ChatTranscript>>,
    selected_module: Arc<RwLock<Option<CourseModule>>>,
    preferences: Arc<RwLock<LearnerPreferences>>,
    catalog: Course,
    assignment: Assignment,
    progress: ProgressSnapshot,
    code_runner: Arc<dyn CodeRunner>,
    tutor: Arc<dyn TutorBackend>,
    preference_repository: Arc<dyn PreferenceRepository>,
}

impl LearningSession {
    /// Creates a session with explicit backend collaborators.
    ///
    /// # Arguments
    ///
    /// * `config` - Timing configuration
    /// * `code_runner` - The code grading backend
    /// * `tutor` - The tutor chat backend
    /// * `preference_repository` - Storage for the learner preferences
    pub fn new(
        config: SessionConfig,
        code_runner: Arc<dyn CodeRunner>,
        tutor: Arc<dyn TutorBackend>,
        preference_repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self {
            config,
            router: Arc::new(RwLock::new(SectionRouter::default())),
            overlay: Arc::new(Mutex::new(TeachingOverlay::new())),
            overlay_expiry: Arc::new(Mutex::new(None)),
            code_run: Arc::new(Mutex::new(AsyncOperation::new())),
            chat_reply: Arc::new(Mutex::new(AsyncOperation::new())),
            transcript: Arc::new(Mutex::new(ChatTranscript::new())),
            selected_module: Arc::new(RwLock::new(None)),
            preferences: Arc::new(RwLock::new(LearnerPreferences::new())),
            catalog: Course::dsa_in_cpp(),
            assignment: Assignment::array_reversal(),
            progress: ProgressSnapshot::sample(),
            code_runner,
            tutor,
            preference_repository,
        }
    }

    /// Creates a session wired to the canned backends, with their artificial
    /// delay taken from `config`.
    pub fn with_canned_backends(
        config: SessionConfig,
        preference_repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        let delay = config.response_delay();
        Self::new(
            config,
            Arc::new(CannedCodeRunner::with_delay(delay)),
            Arc::new(CannedTutor::with_delay(delay)),
            preference_repository,
        )
    }

    /// Loads the stored preferences into the session.
    ///
    /// Loss of the stored value is non-fatal: any load error is logged and
    /// the defaults stay in place.
    pub async fn load_preferences(&self) {
        match self.preference_repository.load().await {
            Ok(preferences) => *self.preferences.write().await = preferences,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load preferences, keeping defaults");
            }
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Returns the active section.
    pub async fn active_section(&self) -> Section {
        self.router.read().await.active()
    }

    /// Navigates to a section.
    pub async fn navigate(&self, section: Section) {
        self.router.write().await.navigate(section);
    }

    /// Navigates to a section named by an untyped label.
    ///
    /// # Errors
    ///
    /// Returns `EduError::InvalidSection` for a label outside the closed
    /// set.
    pub async fn navigate_label(&self, label: &str) -> Result<()> {
        let section: Section = label.parse()?;
        self.navigate(section).await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lessons and the teaching overlay
    // ------------------------------------------------------------------

    /// Returns the built-in course catalog.
    pub fn catalog(&self) -> &Course {
        &self.catalog
    }

    /// Starts a lesson: records the selection, activates the teaching
    /// overlay with the module's derived message, and routes to the
    /// learning hub.
    ///
    /// # Errors
    ///
    /// Returns `EduError::ModuleNotFound` for an unknown module id.
    pub async fn start_lesson(&self, module_id: u32) -> Result<()> {
        let module = self.catalog.module_by_id(module_id)?.clone();
        tracing::info!(module = %module.title, "lesson started");

        *self.selected_module.write().await = Some(module.clone());
        self.activate_overlay(module.teaching_message()).await?;
        self.navigate(Section::Learn).await;
        Ok(())
    }

    /// Activates the teaching overlay and schedules its expiry.
    ///
    /// A prior pending expiry timer is cancelled before the replacement is
    /// scheduled; the replacement carries the new activation generation.
    ///
    /// # Errors
    ///
    /// Returns `EduError::EmptyOverlayMessage` for an empty message.
    pub async fn activate_overlay(&self, message: impl Into<String>) -> Result<()> {
        let generation = self.overlay.lock().await.activate(message)?;

        let mut slot = self.overlay_expiry.lock().await;
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let overlay = Arc::clone(&self.overlay);
        let ttl = self.config.overlay_ttl();
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            overlay.lock().await.expire(generation);
        }));
        Ok(())
    }

    /// Dismisses the overlay immediately, cancelling its expiry timer.
    ///
    /// A no-op when the overlay is not active.
    pub async fn dismiss_overlay(&self) {
        if let Some(task) = self.overlay_expiry.lock().await.take() {
            task.abort();
        }
        self.overlay.lock().await.deactivate();
    }

    // ------------------------------------------------------------------
    // Backend call sites
    // ------------------------------------------------------------------

    /// Submits the editor contents to the grading backend.
    ///
    /// Single-flight: a submit while a run is pending supersedes it; the
    /// superseded run's completion is discarded by the token check.
    pub async fn run_code(&self, source: impl Into<String>) {
        let source = source.into();
        let token = self.code_run.lock().await.begin();

        let operation = Arc::clone(&self.code_run);
        let runner = Arc::clone(&self.code_runner);
        tokio::spawn(async move {
            let outcome = runner.run(&source).await;
            let mut operation = operation.lock().await;
            match outcome {
                Ok(report) => {
                    operation.complete(token, report);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "code run failed");
                    operation.fail(token, err.to_string());
                }
            }
        });
    }

    /// Sends a learner message to the tutor.
    ///
    /// The user message is appended to the transcript synchronously; the
    /// tutor reply is appended only when its request token is still current
    /// at resolution time. A blank message is ignored.
    pub async fn send_message(&self, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }

        self.transcript.lock().await.push_user(text.clone());
        let token = self.chat_reply.lock().await.begin();

        let operation = Arc::clone(&self.chat_reply);
        let transcript = Arc::clone(&self.transcript);
        let tutor = Arc::clone(&self.tutor);
        tokio::spawn(async move {
            let outcome = tutor.reply(&text).await;
            let mut operation = operation.lock().await;
            match outcome {
                Ok(reply) => {
                    if operation.complete(token, reply.clone()) {
                        transcript.lock().await.push_assistant(reply);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "tutor reply failed");
                    operation.fail(token, err.to_string());
                }
            }
        });
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    /// Returns the current difficulty preference.
    pub async fn difficulty(&self) -> DifficultyLevel {
        self.preferences.read().await.difficulty
    }

    /// Sets the difficulty preference and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error when the repository save fails; the in-memory
    /// preference is updated regardless.
    pub async fn set_difficulty(&self, level: DifficultyLevel) -> Result<()> {
        let preferences = {
            let mut guard = self.preferences.write().await;
            guard.difficulty = level;
            *guard
        };
        self.preference_repository.save(&preferences).await
    }

    // ------------------------------------------------------------------
    // Read path
    // ------------------------------------------------------------------

    /// Takes an immutable copy of all state the view composer reads.
    pub async fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            section: self.router.read().await.active(),
            overlay: self.overlay.lock().await.clone(),
            code_run: self.code_run.lock().await.state().clone(),
            chat_reply: self.chat_reply.lock().await.state().clone(),
            transcript: self.transcript.lock().await.clone(),
            selected_module: self.selected_module.read().await.clone(),
            preferences: *self.preferences.read().await,
            catalog: self.catalog.clone(),
            assignment: self.assignment.clone(),
            progress: self.progress.clone(),
        }
    }

    /// Composes the view model for the current state.
    pub async fn view(&self) -> ViewModel {
        compose(&self.snapshot().await)
    }
}
