//! Built-in course catalog.
//!
//! The client ships one course, "Data Structures & Algorithms in C++", with
//! three modules. The catalog is static display data; the orchestration
//! core only reads it to derive the teaching-overlay message when a lesson
//! starts and to record the lesson selection.

use serde::{Deserialize, Serialize};

use crate::error::{EduError, Result};

/// Difficulty tier of a course module (display data).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A single module of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    /// Unique id within the course.
    pub id: u32,
    /// Module title, e.g. "Arrays & Strings".
    pub title: String,
    /// One-line description.
    pub description: String,
    /// Number of lessons in the module.
    pub lessons: u32,
    /// Difficulty tier.
    pub difficulty: ModuleDifficulty,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Key topics covered, most fundamental first.
    pub topics: Vec<String>,
}

impl CourseModule {
    /// Builds the teaching-overlay message shown when this module's lesson
    /// starts.
    pub fn teaching_message(&self) -> String {
        let first_topic = self
            .topics
            .first()
            .map(String::as_str)
            .unwrap_or(self.title.as_str());
        format!(
            "Let's explore {}! I'll guide you through {} with practical examples \
             and hands-on coding exercises.",
            self.title, first_topic
        )
    }
}

/// A course with its modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course title.
    pub title: String,
    /// Course description.
    pub description: String,
    /// Modules in curriculum order.
    pub modules: Vec<CourseModule>,
}

impl Course {
    /// The built-in DSA course.
    pub fn dsa_in_cpp() -> Self {
        Self {
            title: "Data Structures & Algorithms in C++".to_string(),
            description: "Master DSA fundamentals with AI-powered personalized learning"
                .to_string(),
            modules: vec![
                CourseModule {
                    id: 1,
                    title: "Arrays & Strings".to_string(),
                    description:
                        "Learn array manipulation, string processing, and optimization techniques"
                            .to_string(),
                    lessons: 8,
                    difficulty: ModuleDifficulty::Beginner,
                    progress: 75,
                    topics: vec![
                        "Array Basics".to_string(),
                        "Two Pointers".to_string(),
                        "Sliding Window".to_string(),
                        "String Algorithms".to_string(),
                    ],
                },
                CourseModule {
                    id: 2,
                    title: "Linked Lists".to_string(),
                    description: "Master pointer manipulation and dynamic data structures"
                        .to_string(),
                    lessons: 6,
                    difficulty: ModuleDifficulty::Intermediate,
                    progress: 45,
                    topics: vec![
                        "Singly Linked List".to_string(),
                        "Doubly Linked List".to_string(),
                        "Cycle Detection".to_string(),
                        "Reversal".to_string(),
                    ],
                },
                CourseModule {
                    id: 3,
                    title: "Trees & Graphs".to_string(),
                    description: "Explore hierarchical structures and graph algorithms"
                        .to_string(),
                    lessons: 12,
                    difficulty: ModuleDifficulty::Advanced,
                    progress: 20,
                    topics: vec![
                        "Binary Trees".to_string(),
                        "BST".to_string(),
                        "Tree Traversal".to_string(),
                        "Graph BFS/DFS".to_string(),
                    ],
                },
            ],
        }
    }

    /// Looks up a module by id.
    ///
    /// # Errors
    ///
    /// Returns `EduError::ModuleNotFound` for an id outside the catalog.
    pub fn module_by_id(&self, id: u32) -> Result<&CourseModule> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .ok_or(EduError::ModuleNotFound(id))
    }

    /// Total lesson count across all modules.
    pub fn total_lessons(&self) -> u32 {
        self.modules.iter().map(|m| m.lessons).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_course_has_three_modules() {
        let course = Course::dsa_in_cpp();
        assert_eq!(course.modules.len(), 3);
        assert_eq!(course.total_lessons(), 26);
    }

    #[test]
    fn test_module_lookup() {
        let course = Course::dsa_in_cpp();
        assert_eq!(course.module_by_id(2).unwrap().title, "Linked Lists");
    }

    #[test]
    fn test_module_lookup_unknown_id() {
        let course = Course::dsa_in_cpp();
        let err = course.module_by_id(99).unwrap_err();
        assert!(matches!(err, EduError::ModuleNotFound(99)));
    }

    #[test]
    fn test_teaching_message_uses_title_and_first_topic() {
        let course = Course::dsa_in_cpp();
        let module = course.module_by_id(1).unwrap();
        let message = module.teaching_message();
        assert!(message.starts_with("Let's explore Arrays & Strings!"));
        assert!(message.contains("Array Basics"));
    }
}
