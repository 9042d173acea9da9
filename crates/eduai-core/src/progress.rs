//! Learner progress sample data.
//!
//! Read-only display data for the dashboard and profile sections. Nothing
//! in the orchestration core mutates it; the view composer hands it to the
//! rendering collaborator as-is.

use serde::{Deserialize, Serialize};

/// One day of study activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyActivity {
    /// Day label, e.g. "Mon".
    pub day: String,
    /// Hours studied.
    pub hours: f32,
    /// Problems solved.
    pub problems: u32,
}

/// Share of study time spent on one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicShare {
    /// Topic name.
    pub name: String,
    /// Percentage of total focus (all shares sum to 100).
    pub percent: u8,
}

/// Headline statistics shown above the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineStats {
    pub problems_solved: u32,
    pub study_hours: f32,
    pub streak_days: u32,
    pub accuracy_percent: u8,
}

/// Everything the progress surfaces render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Weekly activity, Monday first.
    pub weekly: Vec<DailyActivity>,
    /// Focus distribution across topics.
    pub topics: Vec<TopicShare>,
    /// Headline stats.
    pub stats: HeadlineStats,
}

impl ProgressSnapshot {
    /// The built-in sample data.
    pub fn sample() -> Self {
        let day = |day: &str, hours: f32, problems: u32| DailyActivity {
            day: day.to_string(),
            hours,
            problems,
        };
        let topic = |name: &str, percent: u8| TopicShare {
            name: name.to_string(),
            percent,
        };

        Self {
            weekly: vec![
                day("Mon", 2.5, 8),
                day("Tue", 3.2, 12),
                day("Wed", 1.8, 6),
                day("Thu", 4.1, 15),
                day("Fri", 2.9, 10),
                day("Sat", 5.2, 18),
                day("Sun", 3.6, 13),
            ],
            topics: vec![
                topic("Arrays", 35),
                topic("Trees", 25),
                topic("Graphs", 20),
                topic("DP", 20),
            ],
            stats: HeadlineStats {
                problems_solved: 142,
                study_hours: 28.5,
                streak_days: 12,
                accuracy_percent: 87,
            },
        }
    }
}
