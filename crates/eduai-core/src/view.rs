//! View composition.
//!
//! [`compose`] is the single read path of the core: a pure function from a
//! [`SessionSnapshot`] to a [`ViewModel`] describing what the rendering
//! collaborator should show. No mutation, no timers, no assumption about
//! the rendering technology; the output is plain serializable data.

use serde::{Deserialize, Serialize};

use crate::assignment::{Assignment, RunReport};
use crate::catalog::{Course, CourseModule};
use crate::operation::OperationState;
use crate::overlay::TeachingOverlay;
use crate::preference::LearnerPreferences;
use crate::progress::ProgressSnapshot;
use crate::router::Section;
use crate::transcript::ChatTranscript;

/// Immutable copy of all state the composer reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub section: Section,
    pub overlay: TeachingOverlay,
    pub code_run: OperationState<RunReport>,
    pub chat_reply: OperationState<String>,
    pub transcript: ChatTranscript,
    pub selected_module: Option<CourseModule>,
    pub preferences: LearnerPreferences,
    pub catalog: Course,
    pub assignment: Assignment,
    pub progress: ProgressSnapshot,
}

/// The teaching banner next to the avatar, shown while the overlay is
/// active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayBanner {
    pub message: String,
}

/// What the assignments run panel should show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunPanel {
    /// No run yet.
    Idle,
    /// A run is in progress; show the spinner.
    Running,
    /// The latest run finished; show the report.
    Report { report: RunReport },
    /// The latest run failed; rendered distinctly from a report.
    Failed { message: String },
}

/// The surface for the active section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "surface", rename_all = "snake_case")]
pub enum Surface {
    /// Progress overview plus the avatar panel.
    Dashboard { progress: ProgressSnapshot },
    /// Course explorer plus the avatar panel.
    Learn {
        course: Course,
        selected_module: Option<CourseModule>,
    },
    /// Coding challenge, editor, and run panel.
    Assignments {
        assignment: Assignment,
        run_panel: RunPanel,
    },
    /// Tutor chat plus the avatar panel.
    Chat {
        transcript: ChatTranscript,
        /// Whether the typing indicator should be shown.
        awaiting_reply: bool,
    },
    /// Progress and personalization.
    Profile {
        progress: ProgressSnapshot,
        preferences: LearnerPreferences,
    },
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// The active section, for navigation highlighting.
    pub section: Section,
    /// The teaching banner, when the overlay is active.
    pub overlay: Option<OverlayBanner>,
    /// The surface for the active section.
    pub surface: Surface,
}

/// Composes the view model for the current state.
pub fn compose(snapshot: &SessionSnapshot) -> ViewModel {
    let overlay = snapshot.overlay.is_active().then(|| OverlayBanner {
        message: snapshot.overlay.message().to_string(),
    });

    let surface = match snapshot.section {
        Section::Dashboard => Surface::Dashboard {
            progress: snapshot.progress.clone(),
        },
        Section::Learn => Surface::Learn {
            course: snapshot.catalog.clone(),
            selected_module: snapshot.selected_module.clone(),
        },
        Section::Assignments => Surface::Assignments {
            assignment: snapshot.assignment.clone(),
            run_panel: run_panel(&snapshot.code_run),
        },
        Section::Chat => Surface::Chat {
            transcript: snapshot.transcript.clone(),
            awaiting_reply: matches!(snapshot.chat_reply, OperationState::Pending),
        },
        Section::Profile => Surface::Profile {
            progress: snapshot.progress.clone(),
            preferences: snapshot.preferences,
        },
    };

    ViewModel {
        section: snapshot.section,
        overlay,
        surface,
    }
}

fn run_panel(state: &OperationState<RunReport>) -> RunPanel {
    match state {
        OperationState::Idle => RunPanel::Idle,
        OperationState::Pending => RunPanel::Running,
        OperationState::Resolved { result } => RunPanel::Report {
            report: result.clone(),
        },
        OperationState::Failed { message } => RunPanel::Failed {
            message: message.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::AsyncOperation;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            section: Section::Learn,
            overlay: TeachingOverlay::new(),
            code_run: OperationState::Idle,
            chat_reply: OperationState::Idle,
            transcript: ChatTranscript::new(),
            selected_module: None,
            preferences: LearnerPreferences::new(),
            catalog: Course::dsa_in_cpp(),
            assignment: Assignment::array_reversal(),
            progress: ProgressSnapshot::sample(),
        }
    }

    #[test]
    fn test_inactive_overlay_yields_no_banner() {
        let view = compose(&snapshot());
        assert!(view.overlay.is_none());
    }

    #[test]
    fn test_active_overlay_yields_banner() {
        let mut snap = snapshot();
        snap.overlay.activate("Let's explore Arrays").unwrap();
        let view = compose(&snap);
        assert_eq!(
            view.overlay,
            Some(OverlayBanner {
                message: "Let's explore Arrays".to_string()
            })
        );
    }

    #[test]
    fn test_learn_surface_carries_selection() {
        let mut snap = snapshot();
        snap.selected_module = Some(snap.catalog.module_by_id(2).unwrap().clone());
        let view = compose(&snap);
        match view.surface {
            Surface::Learn {
                selected_module: Some(module),
                ..
            } => assert_eq!(module.title, "Linked Lists"),
            other => panic!("expected learn surface with selection, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_run_shows_spinner() {
        let mut snap = snapshot();
        snap.section = Section::Assignments;
        let mut op: AsyncOperation<RunReport> = AsyncOperation::new();
        op.begin();
        snap.code_run = op.state().clone();
        let view = compose(&snap);
        match view.surface {
            Surface::Assignments { run_panel, .. } => assert_eq!(run_panel, RunPanel::Running),
            other => panic!("expected assignments surface, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_run_is_distinct_from_report() {
        let mut snap = snapshot();
        snap.section = Section::Assignments;
        snap.code_run = OperationState::Failed {
            message: "grader unavailable".to_string(),
        };
        let view = compose(&snap);
        match view.surface {
            Surface::Assignments { run_panel, .. } => assert_eq!(
                run_panel,
                RunPanel::Failed {
                    message: "grader unavailable".to_string()
                }
            ),
            other => panic!("expected assignments surface, got {other:?}"),
        }
    }

    #[test]
    fn test_chat_surface_typing_indicator() {
        let mut snap = snapshot();
        snap.section = Section::Chat;
        snap.chat_reply = OperationState::Pending;
        let view = compose(&snap);
        match view.surface {
            Surface::Chat { awaiting_reply, .. } => assert!(awaiting_reply),
            other => panic!("expected chat surface, got {other:?}"),
        }
    }

    #[test]
    fn test_every_section_has_a_surface() {
        for section in Section::ALL {
            let mut snap = snapshot();
            snap.section = section;
            let view = compose(&snap);
            assert_eq!(view.section, section);
        }
    }

    #[test]
    fn test_view_model_serializes() {
        let view = compose(&snapshot());
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"section\""));
    }
}
