//! Countable study units recognized inside task descriptions.
//!
//! A description such as "Read 5 chapters" carries a quantity and a unit,
//! which lets an oversized task be split along unit boundaries instead of
//! raw hours.
//!
//! # Priority
//!
//! When a description mentions several units, the first unit in
//! [`Unit::PRIORITY`] that matches wins, regardless of where it appears
//! in the text:
//!
//! | Priority | Unit | Matches |
//! |----------|------|---------|
//! | 1 | Video | `3 videos` |
//! | 2 | Chapter | `2 chapters` |
//! | 3 | Problem | `20 problems`, `20 practice problems` |
//! | 4 | Flashcard | `60 flashcards` |

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Task;

/// A countable unit of study work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Video,
    Chapter,
    Problem,
    Flashcard,
}

impl Unit {
    /// Recognition order. Earlier units win over later ones.
    pub const PRIORITY: [Unit; 4] = [Unit::Video, Unit::Chapter, Unit::Problem, Unit::Flashcard];

    /// Singular unit word.
    pub fn singular(&self) -> &'static str {
        match self {
            Unit::Video => "video",
            Unit::Chapter => "chapter",
            Unit::Problem => "problem",
            Unit::Flashcard => "flashcard",
        }
    }

    /// Plural unit word.
    pub fn plural(&self) -> &'static str {
        match self {
            Unit::Video => "videos",
            Unit::Chapter => "chapters",
            Unit::Problem => "problems",
            Unit::Flashcard => "flashcards",
        }
    }

    /// Unit word for `count` items (singular only when `count == 1`).
    pub fn label(&self, count: u32) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    fn pattern(&self) -> &'static Regex {
        static PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
            Unit::PRIORITY.map(|unit| {
                let qualifier = match unit {
                    Unit::Problem => r"(?:(?P<qualifier>practice)\s+)?",
                    _ => "",
                };
                let source = format!(
                    r"(?is)^(?P<prefix>.*?)\b(?P<quantity>\d+)\s+{qualifier}{}s?\b",
                    unit.singular()
                );
                Regex::new(&source).expect("unit pattern is a valid regex")
            })
        });
        &PATTERNS[*self as usize]
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// A quantity of units recovered from a task description.
///
/// `prefix` is the free text before the number ("Read" in "Read 5 chapters")
/// and is reused when building chunk descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMeasure {
    /// Leading phrase, trimmed. May be empty.
    pub prefix: String,
    /// Number of units. Always positive.
    pub quantity: u32,
    /// Recognized unit.
    pub unit: Unit,
    /// Word between the number and the unit ("practice" in "20 practice problems").
    pub qualifier: Option<String>,
}

impl UnitMeasure {
    /// Scans a description for a unit measure.
    ///
    /// Only the highest-priority matching unit is considered. Returns `None`
    /// when no unit matches, or when the winning match has a zero (or
    /// unrepresentable) quantity.
    ///
    /// # Example
    /// ```
    /// use study_planner::models::{Unit, UnitMeasure};
    ///
    /// let m = UnitMeasure::parse("Read 5 chapters").unwrap();
    /// assert_eq!(m.prefix, "Read");
    /// assert_eq!(m.quantity, 5);
    /// assert_eq!(m.unit, Unit::Chapter);
    /// ```
    pub fn parse(description: &str) -> Option<Self> {
        let (unit, caps) = Unit::PRIORITY
            .iter()
            .find_map(|unit| unit.pattern().captures(description).map(|caps| (*unit, caps)))?;

        let quantity: u32 = caps.name("quantity")?.as_str().parse().ok()?;
        if quantity == 0 {
            return None;
        }

        Some(Self {
            prefix: caps
                .name("prefix")
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            quantity,
            unit,
            qualifier: caps.name("qualifier").map(|m| m.as_str().to_string()),
        })
    }

    /// Description for a chunk covering `count` units.
    pub fn describe(&self, count: u32) -> String {
        let mut out = String::new();
        if !self.prefix.is_empty() {
            out.push_str(&self.prefix);
            out.push(' ');
        }
        out.push_str(&count.to_string());
        out.push(' ');
        if let Some(qualifier) = &self.qualifier {
            out.push_str(qualifier);
            out.push(' ');
        }
        out.push_str(self.unit.label(count));
        out
    }
}

/// Structured view of a task used by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskShape {
    /// No countable unit recognized; only raw hours can be split.
    Plain { duration: f64 },
    /// A unit measure was recognized; splitting can follow unit boundaries.
    Unitized { measure: UnitMeasure, duration: f64 },
}

impl TaskShape {
    /// Classifies a task.
    pub fn of(task: &Task) -> Self {
        match UnitMeasure::parse(&task.description) {
            Some(measure) => TaskShape::Unitized {
                measure,
                duration: task.duration,
            },
            None => TaskShape::Plain {
                duration: task.duration,
            },
        }
    }

    /// Duration of the underlying task (hours).
    pub fn duration(&self) -> f64 {
        match self {
            TaskShape::Plain { duration } | TaskShape::Unitized { duration, .. } => *duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chapters() {
        let m = UnitMeasure::parse("Read 5 chapters").unwrap();
        assert_eq!(m.prefix, "Read");
        assert_eq!(m.quantity, 5);
        assert_eq!(m.unit, Unit::Chapter);
        assert_eq!(m.qualifier, None);
    }

    #[test]
    fn test_parse_singular() {
        let m = UnitMeasure::parse("Watch 1 video").unwrap();
        assert_eq!(m.unit, Unit::Video);
        assert_eq!(m.quantity, 1);
    }

    #[test]
    fn test_parse_case_insensitive() {
        let m = UnitMeasure::parse("Review 60 FLASHCARDS").unwrap();
        assert_eq!(m.unit, Unit::Flashcard);
        assert_eq!(m.quantity, 60);
    }

    #[test]
    fn test_parse_practice_problems() {
        let m = UnitMeasure::parse("Solve 20 practice problems").unwrap();
        assert_eq!(m.prefix, "Solve");
        assert_eq!(m.unit, Unit::Problem);
        assert_eq!(m.qualifier.as_deref(), Some("practice"));
        assert_eq!(m.describe(10), "Solve 10 practice problems");
        assert_eq!(m.describe(1), "Solve 1 practice problem");
    }

    #[test]
    fn test_priority_beats_position() {
        // Chapter appears first in the text, but video has higher priority
        let m = UnitMeasure::parse("Read 2 chapters then watch 3 videos").unwrap();
        assert_eq!(m.unit, Unit::Video);
        assert_eq!(m.quantity, 3);
        assert_eq!(m.prefix, "Read 2 chapters then watch");
    }

    #[test]
    fn test_zero_quantity_is_none() {
        assert!(UnitMeasure::parse("Watch 0 videos").is_none());
    }

    #[test]
    fn test_zero_winner_does_not_fall_through() {
        // The video match wins, and its zero quantity means no measure at all
        assert!(UnitMeasure::parse("Watch 0 videos and read 3 chapters").is_none());
    }

    #[test]
    fn test_no_unit() {
        assert!(UnitMeasure::parse("Deep focus block").is_none());
        assert!(UnitMeasure::parse("Read chapters").is_none());
        assert!(UnitMeasure::parse("Watch 3 videogames").is_none());
    }

    #[test]
    fn test_parse_across_line_break() {
        let m = UnitMeasure::parse("Review lecture notes\nthen read 5 chapters").unwrap();
        assert_eq!(m.prefix, "Review lecture notes\nthen read");
        assert_eq!(m.quantity, 5);
        assert_eq!(m.unit, Unit::Chapter);
    }

    #[test]
    fn test_quantity_overflow_is_none() {
        assert!(UnitMeasure::parse("Watch 99999999999 videos").is_none());
    }

    #[test]
    fn test_describe_without_prefix() {
        let m = UnitMeasure::parse("12 chapters").unwrap();
        assert_eq!(m.prefix, "");
        assert_eq!(m.describe(3), "3 chapters");
    }

    #[test]
    fn test_task_shape() {
        let plain = TaskShape::of(&Task::new("Deep focus block", 5.0));
        assert_eq!(plain, TaskShape::Plain { duration: 5.0 });

        let unitized = TaskShape::of(&Task::new("Read 5 chapters", 7.5));
        match unitized {
            TaskShape::Unitized { measure, duration } => {
                assert_eq!(measure.quantity, 5);
                assert!((duration - 7.5).abs() < 1e-10);
            }
            other => panic!("expected unitized shape, got {other:?}"),
        }
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Chapter.label(1), "chapter");
        assert_eq!(Unit::Chapter.label(2), "chapters");
        assert_eq!(Unit::Flashcard.to_string(), "flashcard");
    }
}
