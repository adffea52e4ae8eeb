//! Greedy day allocator.
//!
//! # Algorithm
//!
//! 1. Order tasks: input order (compact) or duration descending, stable (balanced).
//! 2. For each task, select a day whose running total still has room:
//!    - compact: lowest day index (first fit);
//!    - balanced: lowest running total, ties broken by lowest day index.
//! 3. If no day has room, force the task into the last day.
//!
//! The fallback in step 3 means every task is always placed; on infeasible
//! input the last day ends up over capacity.
//!
//! # Complexity
//! O(n log n + n * d) where n = tasks, d = days.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (LPT rule)

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Schedule, Task};

/// Slack allowed when testing whether a task fits a day (hours).
///
/// Half of the 0.01h step chunks are rounded to, so a chunk rounded up past
/// a capacity like 1.777h still fits an empty day. Only the overflow day can
/// end up more than 0.005h over capacity.
pub const FIT_TOLERANCE: f64 = 0.005;

/// Day selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AllocationMode {
    /// Longest task first, into the least-loaded day that fits.
    Balanced,
    /// Input order, into the earliest day that fits.
    #[default]
    Compact,
}

impl AllocationMode {
    /// Returns task indices in placement order.
    pub fn task_order(&self, tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        if *self == AllocationMode::Balanced {
            // sort_by is stable: equal durations keep input order
            indices.sort_by(|&a, &b| tasks[b].duration.total_cmp(&tasks[a].duration));
        }
        indices
    }

    /// Picks a day for a task of `duration` hours, or `None` if none has room.
    pub fn select_day(&self, day_totals: &[f64], duration: f64, capacity: f64) -> Option<usize> {
        let fits = |day: &usize| day_totals[*day] + duration <= capacity + FIT_TOLERANCE;
        match self {
            AllocationMode::Compact => (0..day_totals.len()).find(fits),
            AllocationMode::Balanced => (0..day_totals.len())
                .filter(fits)
                .min_by(|&a, &b| day_totals[a].total_cmp(&day_totals[b]).then(a.cmp(&b))),
        }
    }
}

impl fmt::Display for AllocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationMode::Balanced => f.write_str("balanced"),
            AllocationMode::Compact => f.write_str("compact"),
        }
    }
}

impl FromStr for AllocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(Self::Balanced),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("Unknown mode: {}. Use: balanced or compact", s)),
        }
    }
}

/// Capacity-constrained greedy allocator.
///
/// # Example
///
/// ```
/// use study_planner::models::Task;
/// use study_planner::scheduler::{AllocationMode, DayAllocator};
///
/// let tasks = vec![Task::new("A", 3.0), Task::new("B", 1.0), Task::new("C", 2.0)];
/// let schedule = DayAllocator::new(2, 3.0)
///     .with_mode(AllocationMode::Balanced)
///     .allocate(&tasks);
///
/// assert_eq!(schedule.day(0).unwrap().tasks[0].description, "A");
/// assert_eq!(schedule.day(1).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DayAllocator {
    total_days: usize,
    capacity: f64,
    mode: AllocationMode,
}

impl DayAllocator {
    /// Creates an allocator in compact mode.
    ///
    /// `total_days >= 1` and `capacity > 0` are preconditions; see
    /// [`crate::validation::validate_input`].
    pub fn new(total_days: usize, capacity: f64) -> Self {
        Self {
            total_days,
            capacity,
            mode: AllocationMode::default(),
        }
    }

    /// Sets the selection policy.
    pub fn with_mode(mut self, mode: AllocationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Planning horizon length.
    pub fn total_days(&self) -> usize {
        self.total_days
    }

    /// Hours per day.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Selection policy.
    pub fn mode(&self) -> AllocationMode {
        self.mode
    }

    /// Places every task on exactly one day.
    ///
    /// Returns a schedule with exactly `total_days` days. With a zero-day
    /// horizon there is nowhere to place anything and the result is empty.
    pub fn allocate(&self, tasks: &[Task]) -> Schedule {
        let mut schedule = Schedule::with_days(self.total_days);
        let Some(last_day) = self.total_days.checked_sub(1) else {
            return schedule;
        };

        // running hours per day index, rebuilt on every call
        let mut day_totals = vec![0.0_f64; self.total_days];

        for idx in self.mode.task_order(tasks) {
            let task = &tasks[idx];
            let day = match self.mode.select_day(&day_totals, task.duration, self.capacity) {
                Some(day) => day,
                None => {
                    warn!(
                        description = %task.description,
                        hours = task.duration,
                        day = last_day + 1,
                        "no day has room, forcing task into last day"
                    );
                    last_day
                }
            };

            day_totals[day] += task.duration;
            debug!(
                description = %task.description,
                day = day + 1,
                load = day_totals[day],
                "placed task"
            );
            schedule.place(day, task.clone());
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<Task> {
        vec![Task::new("A", 3.0), Task::new("B", 1.0), Task::new("C", 2.0)]
    }

    fn names(schedule: &Schedule, day: usize) -> Vec<&str> {
        schedule.days[day]
            .tasks
            .iter()
            .map(|t| t.description.as_str())
            .collect()
    }

    #[test]
    fn test_balanced_scenario() {
        let schedule = DayAllocator::new(2, 3.0)
            .with_mode(AllocationMode::Balanced)
            .allocate(&abc());
        assert_eq!(names(&schedule, 0), ["A"]);
        assert_eq!(names(&schedule, 1), ["C", "B"]);
    }

    #[test]
    fn test_compact_scenario() {
        let schedule = DayAllocator::new(2, 3.0)
            .with_mode(AllocationMode::Compact)
            .allocate(&abc());
        assert_eq!(names(&schedule, 0), ["A"]);
        assert_eq!(names(&schedule, 1), ["B", "C"]);
    }

    #[test]
    fn test_overflow_into_last_day() {
        let schedule = DayAllocator::new(1, 3.0).allocate(&[Task::new("X", 10.0)]);
        assert_eq!(names(&schedule, 0), ["X"]);
        assert!((schedule.days[0].total_hours() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_overflow_skips_middle_days() {
        // Day 1 is full, day 2 has 1h left; the 2h task must land on day 3 (last)
        let tasks = vec![
            Task::new("A", 3.0),
            Task::new("B", 2.0),
            Task::new("C", 3.0),
            Task::new("D", 2.0),
        ];
        let schedule = DayAllocator::new(3, 3.0).allocate(&tasks);
        assert_eq!(names(&schedule, 0), ["A"]);
        assert_eq!(names(&schedule, 1), ["B"]);
        assert_eq!(names(&schedule, 2), ["C", "D"]);
        assert!((schedule.days[2].total_hours() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_balanced_spreads_equal_tasks() {
        let tasks: Vec<Task> = (0..4).map(|i| Task::new(format!("T{i}"), 1.0)).collect();
        let schedule = DayAllocator::new(4, 3.0)
            .with_mode(AllocationMode::Balanced)
            .allocate(&tasks);
        for day in 0..4 {
            assert_eq!(names(&schedule, day), [format!("T{day}").as_str()]);
        }
    }

    #[test]
    fn test_compact_fills_early_days() {
        let tasks: Vec<Task> = (0..4).map(|i| Task::new(format!("T{i}"), 1.0)).collect();
        let schedule = DayAllocator::new(4, 3.0).allocate(&tasks);
        assert_eq!(names(&schedule, 0), ["T0", "T1", "T2"]);
        assert_eq!(names(&schedule, 1), ["T3"]);
        assert!(schedule.days[2].is_empty());
        assert!(schedule.days[3].is_empty());
    }

    #[test]
    fn test_balanced_stable_ties() {
        let tasks = vec![Task::new("first", 2.0), Task::new("second", 2.0)];
        let order = AllocationMode::Balanced.task_order(&tasks);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_float_sums_on_capacity_fit() {
        let tasks = vec![Task::new("a", 0.1), Task::new("b", 0.2)];
        let schedule = DayAllocator::new(2, 0.3).allocate(&tasks);
        assert_eq!(names(&schedule, 0), ["a", "b"]);
    }

    #[test]
    fn test_rounded_up_chunk_fits_empty_day() {
        // 1.777h capacity: full chunks are stored as 1.78h
        let tasks = vec![Task::new("a", 1.78), Task::new("b", 1.78), Task::new("c", 1.45)];
        for mode in [AllocationMode::Compact, AllocationMode::Balanced] {
            let schedule = DayAllocator::new(4, 1.777).with_mode(mode).allocate(&tasks);
            assert_eq!(names(&schedule, 0), ["a"]);
            assert_eq!(names(&schedule, 1), ["b"]);
            assert_eq!(names(&schedule, 2), ["c"]);
            assert!(schedule.overloaded_days(1.777).is_empty());
        }
    }

    #[test]
    fn test_fit_tolerance_is_half_a_rounding_step() {
        let schedule = DayAllocator::new(2, 3.0)
            .allocate(&[Task::new("a", 2.0), Task::new("b", 1.01)]);
        assert_eq!(names(&schedule, 0), ["a"]);
        assert_eq!(names(&schedule, 1), ["b"]);
    }

    #[test]
    fn test_mode_value_enum() {
        assert_eq!(
            <AllocationMode as ValueEnum>::from_str("balanced", false),
            Ok(AllocationMode::Balanced)
        );
        let names: Vec<String> = AllocationMode::value_variants()
            .iter()
            .filter_map(|m| m.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, ["balanced", "compact"]);
    }

    #[test]
    fn test_empty_tasks() {
        let schedule = DayAllocator::new(3, 2.0).allocate(&[]);
        assert_eq!(schedule.day_count(), 3);
        assert_eq!(schedule.task_count(), 0);
    }

    #[test]
    fn test_zero_days() {
        let schedule = DayAllocator::new(0, 2.0).allocate(&abc());
        assert_eq!(schedule.day_count(), 0);
    }

    #[test]
    fn test_deterministic() {
        let tasks = vec![
            Task::new("a", 1.2),
            Task::new("b", 2.5),
            Task::new("c", 0.7),
            Task::new("d", 2.5),
        ];
        let alloc = DayAllocator::new(3, 3.0).with_mode(AllocationMode::Balanced);
        assert_eq!(alloc.allocate(&tasks), alloc.allocate(&tasks));
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("Balanced".parse::<AllocationMode>(), Ok(AllocationMode::Balanced));
        assert_eq!("compact".parse::<AllocationMode>(), Ok(AllocationMode::Compact));
        assert!("fastest".parse::<AllocationMode>().is_err());
        assert_eq!(AllocationMode::Balanced.to_string(), "balanced");
        assert_eq!(AllocationMode::default(), AllocationMode::Compact);
    }
}
