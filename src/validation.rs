//! Input validation for planning requests.
//!
//! Checks the preconditions of the normalizer and allocator before either
//! runs. Detects:
//! - Non-finite daily capacity, or one below the 0.01h duration resolution
//! - Zero-day planning horizon
//! - Negative or non-finite task durations
//!
//! An empty task list is not an error here; the planner reports it as
//! "nothing to schedule" instead.

use thiserror::Error;

use crate::models::Task;

/// Smallest usable daily capacity. Chunk durations are kept to two decimals,
/// so anything smaller could only be filled with zero-hour chunks.
pub const MIN_CAPACITY: f64 = 0.01;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Capacity is below [`MIN_CAPACITY`] or not a finite number.
    InvalidCapacity,
    /// Planning horizon has no days.
    InvalidHorizon,
    /// A task duration is negative or not a finite number.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a planning run.
///
/// Checks:
/// 1. `capacity >= MIN_CAPACITY` and finite
/// 2. `total_days >= 1`
/// 3. every task duration is finite and `>= 0`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(tasks: &[Task], total_days: usize, capacity: f64) -> ValidationResult {
    let mut errors = Vec::new();

    if !capacity.is_finite() || capacity < MIN_CAPACITY {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!("Daily capacity must be at least {MIN_CAPACITY} hours, got {capacity}"),
        ));
    }

    if total_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHorizon,
            "Planning horizon must be at least 1 day",
        ));
    }

    for task in tasks {
        if !task.duration.is_finite() || task.duration < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Task '{}' has invalid duration {}",
                    task.description, task.duration
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
