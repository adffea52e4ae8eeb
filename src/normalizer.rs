//! Oversized-task splitting.
//!
//! Rewrites every task longer than the daily capacity into an ordered run of
//! chunks that each fit in one day. Total duration is preserved up to
//! two-decimal rounding at each emitted chunk.
//!
//! # Algorithm
//!
//! 1. A task that already fits passes through (rounded).
//! 2. If the description carries a unit measure ("Read 5 chapters") and a
//!    single unit fits in a day, split along unit boundaries: each chunk
//!    covers `floor(capacity / per_unit)` units, the last one the rest.
//! 3. Otherwise split raw hours: `floor(duration / capacity)` full chunks
//!    plus one remainder chunk.
//!
//! Rounding drift is not carried across chunks; each chunk may be off by
//! up to 0.005h from its exact share. A raw remainder that rounds to 0.00h
//! is dropped rather than emitted as an empty chunk, so 3.001h at a 3h
//! capacity becomes a single 3.00h chunk.
//!
//! # Complexity
//! O(n + c) where n = tasks, c = chunks emitted.

use tracing::debug;

use crate::models::{round_hours, Task, TaskShape, UnitMeasure};

/// Slack added before flooring unit-per-day ratios.
pub const SPLIT_EPSILON: f64 = 1e-9;

/// Splits every oversized task so that each output task fits in `capacity`.
///
/// `capacity` must be positive; callers validate it first.
///
/// # Example
///
/// ```
/// use study_planner::models::Task;
/// use study_planner::normalizer::normalize;
///
/// let chunks = normalize(&[Task::new("Read 5 chapters", 7.5)], 3.0);
/// let descriptions: Vec<_> = chunks.iter().map(|t| t.description.as_str()).collect();
/// assert_eq!(descriptions, ["Read 2 chapters", "Read 2 chapters", "Read 1 chapter"]);
/// ```
pub fn normalize(tasks: &[Task], capacity: f64) -> Vec<Task> {
    let mut out = Vec::with_capacity(tasks.len());
    for task in tasks {
        out.extend(normalize_task(task, capacity));
    }
    out
}

/// Splits a single task. Returns a one-element vector when it already fits.
pub fn normalize_task(task: &Task, capacity: f64) -> Vec<Task> {
    if task.duration <= capacity {
        return vec![task.rounded()];
    }

    let chunks = match task.shape() {
        TaskShape::Unitized { measure, .. } => split_by_unit(task, &measure, capacity),
        TaskShape::Plain { .. } => split_raw(task, capacity),
    };

    debug!(
        description = %task.description,
        hours = task.duration,
        chunks = chunks.len(),
        "split oversized task"
    );
    chunks
}

/// Splits by raw hours: full `capacity` chunks followed by a remainder.
///
/// All chunks keep the original description.
pub fn split_raw(task: &Task, capacity: f64) -> Vec<Task> {
    if task.duration <= capacity {
        return vec![task.rounded()];
    }

    let full = (task.duration / capacity).floor();
    let remainder = round_hours(task.duration - full * capacity);

    let full = full as usize;
    let mut chunks = Vec::with_capacity(full + 1);
    let chunk_hours = round_hours(capacity);
    chunks.extend((0..full).map(|_| Task::new(task.description.clone(), chunk_hours)));

    if remainder > 0.0 {
        chunks.push(Task::new(task.description.clone(), remainder));
    }
    chunks
}

/// Splits along unit boundaries.
///
/// Falls back to [`split_raw`] when a single unit is already longer than
/// `capacity`, since unit granularity cannot help then.
pub fn split_by_unit(task: &Task, measure: &UnitMeasure, capacity: f64) -> Vec<Task> {
    let per_unit = task.duration / f64::from(measure.quantity);
    if per_unit >= capacity {
        return split_raw(task, capacity);
    }

    // epsilon absorbs float error such as 0.9 / 0.3 = 2.9999999999999996
    let units_per_day = ((capacity / per_unit + SPLIT_EPSILON).floor() as u32).max(1);

    let mut remaining = measure.quantity;
    let mut chunks = Vec::with_capacity(measure.quantity.div_ceil(units_per_day) as usize);
    while remaining > 0 {
        let take = units_per_day.min(remaining);
        chunks.push(Task::new(
            measure.describe(take),
            round_hours(f64::from(take) * per_unit),
        ));
        remaining -= take;
    }
    chunks
}
