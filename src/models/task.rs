//! Study task model.
//!
//! A task is a piece of study work with an estimated duration in hours.
//! Tasks are immutable once created: splitting produces new values
//! rather than editing existing ones.

use serde::{Deserialize, Serialize};

use super::{TaskShape, UnitMeasure};

/// A study task to be placed on a day.
///
/// # Time Representation
/// Durations are fractional hours. Values coming out of the normalizer
/// are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable description (e.g. "Read 5 chapters").
    pub description: String,
    /// Estimated duration in hours. Never negative for valid input.
    pub duration: f64,
}

impl Task {
    /// Creates a new task.
    pub fn new(description: impl Into<String>, duration: f64) -> Self {
        Self {
            description: description.into(),
            duration,
        }
    }

    /// Estimated duration in hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.duration
    }

    /// Returns a copy with the duration rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self::new(self.description.clone(), round_hours(self.duration))
    }

    /// Unit measure recognized in the description, if any.
    pub fn unit_measure(&self) -> Option<UnitMeasure> {
        UnitMeasure::parse(&self.description)
    }

    /// Structured view of this task for splitting.
    pub fn shape(&self) -> TaskShape {
        TaskShape::of(self)
    }
}

/// Rounds an hour value to two decimal places.
#[inline]
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}
