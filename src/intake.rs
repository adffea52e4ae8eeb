//! Study goal intake: deadline and learning-style extraction.
//!
//! Reads a free-text goal such as "I want to learn Data Structures by next
//! month using videos and projects" and recovers the planning horizon and
//! preferred learning styles. Subject extraction is left to the caller.
//!
//! Also turns raw task input (command-line arguments or a YAML/JSON task
//! list) into estimated [`Task`] values.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::estimator::Estimator;
use crate::models::Task;

static DEADLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"in\s+(?P<count>\d+)\s+(?P<unit>days|day|weeks|week|months|month)|by\s+next\s+(?P<next>week|month)",
    )
    .expect("deadline pattern is a valid regex")
});

/// Calendar span of a deadline phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    /// Length in days. Months count as 30 days.
    pub fn days(&self) -> usize {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
        }
    }

    fn parse(word: &str) -> Option<Self> {
        match word.trim_end_matches('s') {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            _ => None,
        }
    }
}

/// A deadline recovered from goal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    /// Matched phrase, lowercased (e.g. "in 2 weeks").
    pub phrase: String,
    /// Number of periods.
    pub count: usize,
    /// Period unit.
    pub period: Period,
}

impl Deadline {
    /// Planning horizon in days, at least 1.
    pub fn horizon_days(&self) -> usize {
        self.count.saturating_mul(self.period.days()).max(1)
    }
}

/// Preferred way of studying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Videos,
    Practice,
    Reading,
    Flashcards,
    Quizzes,
    Projects,
}

impl LearningStyle {
    /// All styles, in reporting order.
    pub const ALL: [LearningStyle; 6] = [
        LearningStyle::Videos,
        LearningStyle::Practice,
        LearningStyle::Reading,
        LearningStyle::Flashcards,
        LearningStyle::Quizzes,
        LearningStyle::Projects,
    ];

    /// Keyword searched for in goal text.
    pub fn keyword(&self) -> &'static str {
        match self {
            LearningStyle::Videos => "videos",
            LearningStyle::Practice => "practice",
            LearningStyle::Reading => "reading",
            LearningStyle::Flashcards => "flashcards",
            LearningStyle::Quizzes => "quizzes",
            LearningStyle::Projects => "projects",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Structured view of a goal statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyGoal {
    /// First deadline phrase found, if any.
    pub deadline: Option<Deadline>,
    /// Learning styles mentioned, in [`LearningStyle::ALL`] order.
    pub preferences: Vec<LearningStyle>,
}

impl StudyGoal {
    /// Planning horizon implied by the deadline.
    pub fn horizon_days(&self) -> Option<usize> {
        self.deadline.as_ref().map(Deadline::horizon_days)
    }
}

/// Parses a free-text goal.
///
/// # Example
/// ```
/// use study_planner::intake::{parse_goal, LearningStyle};
///
/// let goal = parse_goal("Learn Data Structures by next month using videos and projects");
/// assert_eq!(goal.horizon_days(), Some(30));
/// assert_eq!(goal.preferences, vec![LearningStyle::Videos, LearningStyle::Projects]);
/// ```
pub fn parse_goal(text: &str) -> StudyGoal {
    let lower = text.to_lowercase();

    let deadline = DEADLINE.captures(&lower).and_then(|caps| {
        let phrase = caps.get(0)?.as_str().to_string();
        if let Some(next) = caps.name("next") {
            return Some(Deadline {
                phrase,
                count: 1,
                period: Period::parse(next.as_str())?,
            });
        }
        Some(Deadline {
            phrase,
            count: caps.name("count")?.as_str().parse().ok()?,
            period: Period::parse(caps.name("unit")?.as_str())?,
        })
    });

    let preferences = LearningStyle::ALL
        .into_iter()
        .filter(|style| lower.contains(style.keyword()))
        .collect();

    StudyGoal {
        deadline,
        preferences,
    }
}

/// One entry of a task list file.
///
/// ```yaml
/// - description: Read 5 chapters
/// - description: Deep focus block
///   hours: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEntry {
    /// Task description.
    pub description: String,
    /// Explicit duration. Estimated from the description when absent.
    #[serde(default)]
    pub hours: Option<f64>,
}

impl TaskEntry {
    /// Converts to a task, estimating the duration if needed.
    pub fn into_task(self, estimator: &Estimator) -> Task {
        match self.hours {
            Some(hours) => Task::new(self.description, hours),
            None => estimator.task(self.description),
        }
    }
}

/// Parses a `DESCRIPTION[=HOURS]` argument.
///
/// Text after the last `=` is used as the duration when it parses as a
/// number; otherwise the whole argument is the description and the
/// duration is estimated.
pub fn parse_task_arg(arg: &str, estimator: &Estimator) -> Task {
    if let Some((description, hours)) = arg.rsplit_once('=') {
        if let Ok(hours) = hours.trim().parse::<f64>() {
            return Task::new(description.trim(), hours);
        }
    }
    estimator.task(arg.trim())
}

/// Loads a YAML (or JSON) list of [`TaskEntry`] values.
pub fn load_task_file<P: AsRef<Path>>(path: P, estimator: &Estimator) -> Result<Vec<Task>> {
    let content = fs::read_to_string(&path)?;
    let entries: Vec<TaskEntry> = serde_yaml::from_str(&content)?;

    tracing::debug!(
        "Loaded {} tasks from {}",
        entries.len(),
        path.as_ref().display()
    );
    Ok(entries
        .into_iter()
        .map(|entry| entry.into_task(estimator))
        .collect())
}
