//! Heuristic duration estimates from free-text task descriptions.
//!
//! Each rule looks for a pattern in the lowercased description and adds
//! its share of hours. Rules are additive: "Watch 3 videos and solve 20
//! practice problems" counts both the videos and the problems.
//!
//! | Rule | Pattern | Default rate |
//! |------|---------|--------------|
//! | Video | `N video(s)` | 0.5h per video |
//! | Practice | `N practice` | 1.0h per 10 problems |
//! | Reading | `N chapter(s)` | 1.5h per chapter |
//! | Flashcards | `N flashcard(s)` | 0.5h per 30 cards |
//! | Quiz | word `quiz`/`quizzes` | 0.75h flat |
//! | Summary | word `summary`/`summaries` | 1.0h flat |

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{round_hours, Task};

static VIDEO: LazyLock<Regex> = LazyLock::new(|| rule(r"(\d+)\s+videos?"));
static PRACTICE: LazyLock<Regex> = LazyLock::new(|| rule(r"(\d+)\s+practice"));
static CHAPTER: LazyLock<Regex> = LazyLock::new(|| rule(r"(\d+)\s+chapters?"));
static FLASHCARD: LazyLock<Regex> = LazyLock::new(|| rule(r"(\d+)\s+flashcards?"));
static QUIZ: LazyLock<Regex> = LazyLock::new(|| rule(r"\bquiz\b|\bquizzes\b"));
static SUMMARY: LazyLock<Regex> = LazyLock::new(|| rule(r"\bsummary\b|\bsummaries\b"));

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("estimator pattern is a valid regex")
}

/// Per-item time rates (hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct EstimateTable {
    /// Hours per video.
    pub video: f64,
    /// Hours per block of `practice_block` problems.
    pub practice: f64,
    /// Problems per practice block.
    pub practice_block: f64,
    /// Hours per chapter.
    pub reading: f64,
    /// Hours per block of `flashcard_block` cards.
    pub flashcards: f64,
    /// Cards per flashcard block.
    pub flashcard_block: f64,
    /// Hours per quiz mention.
    pub quiz: f64,
    /// Hours per summary mention.
    pub summary: f64,
}

impl Default for EstimateTable {
    fn default() -> Self {
        Self {
            video: 0.5,
            practice: 1.0,
            practice_block: 10.0,
            reading: 1.5,
            flashcards: 0.5,
            flashcard_block: 30.0,
            quiz: 0.75,
            summary: 1.0,
        }
    }
}

/// Estimates task durations from descriptions.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    table: EstimateTable,
}

impl Estimator {
    /// Creates an estimator with the given rates.
    pub fn new(table: EstimateTable) -> Self {
        Self { table }
    }

    /// Rates in use.
    pub fn table(&self) -> &EstimateTable {
        &self.table
    }

    /// Estimated hours for a description, rounded to two decimals.
    ///
    /// Descriptions matching no rule estimate to `0.0`.
    ///
    /// # Example
    /// ```
    /// use study_planner::estimator::Estimator;
    ///
    /// let hours = Estimator::default().estimate("Watch 3 videos and solve 20 practice problems");
    /// assert!((hours - 3.5).abs() < 1e-10);
    /// ```
    pub fn estimate(&self, description: &str) -> f64 {
        let text = description.to_lowercase();
        let t = &self.table;
        let mut hours = 0.0;

        if let Some(count) = leading_count(&VIDEO, &text) {
            hours += count * t.video;
        }
        if let Some(count) = leading_count(&PRACTICE, &text) {
            hours += count / t.practice_block * t.practice;
        }
        if let Some(count) = leading_count(&CHAPTER, &text) {
            hours += count * t.reading;
        }
        if let Some(count) = leading_count(&FLASHCARD, &text) {
            hours += count / t.flashcard_block * t.flashcards;
        }
        if QUIZ.is_match(&text) {
            hours += t.quiz;
        }
        if SUMMARY.is_match(&text) {
            hours += t.summary;
        }

        round_hours(hours)
    }

    /// Builds a task whose duration is estimated from its description.
    pub fn task(&self, description: impl Into<String>) -> Task {
        let description = description.into();
        let hours = self.estimate(&description);
        Task::new(description, hours)
    }
}

/// Count captured by the first match of `pattern`.
fn leading_count(pattern: &Regex, text: &str) -> Option<f64> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
