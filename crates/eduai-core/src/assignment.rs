//! Coding assignment and run report.
//!
//! The assignments section shows one coding challenge with starter code.
//! Running the code goes through the simulated grading backend and produces
//! a [`RunReport`], the typed result held by the code-execution call site.

use serde::{Deserialize, Serialize};

/// A coding challenge shown in the assignments section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Challenge title.
    pub title: String,
    /// Problem statement.
    pub problem: String,
    /// Constraints, one per line.
    pub constraints: Vec<String>,
    /// Starter code pre-filled into the editor.
    pub starter_code: String,
}

impl Assignment {
    /// The built-in array reversal challenge.
    pub fn array_reversal() -> Self {
        Self {
            title: "Array Reversal Challenge".to_string(),
            problem: "Given an array of integers, reverse it in-place without using extra space."
                .to_string(),
            constraints: vec![
                "1 <= array length <= 10^4".to_string(),
                "-10^9 <= array[i] <= 10^9".to_string(),
                "Must solve in O(1) extra space".to_string(),
            ],
            starter_code: "\
#include <iostream>
#include <vector>
using namespace std;

int main() {
    // Write your solution here
    vector<int> arr = {1, 2, 3, 4, 5};

    // TODO: Implement array reversal

    return 0;
}
"
            .to_string(),
        }
    }
}

/// Structured result of one simulated code run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Whether compilation succeeded.
    pub compiled: bool,
    /// Test cases passed.
    pub tests_passed: u32,
    /// Test cases total.
    pub tests_total: u32,
    /// Time complexity note, e.g. "O(n) - Good!".
    pub time_complexity: String,
    /// Space complexity note.
    pub space_complexity: String,
    /// Program output lines.
    pub output: Vec<String>,
    /// One-line feedback from the grader.
    pub feedback: String,
}
