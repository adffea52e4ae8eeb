//! Schedule (solution) model.
//!
//! A schedule is a fixed-length sequence of days over the planning horizon.
//! Index order is calendar order: `days[0]` is day 1. Days may be empty.

use serde::{Deserialize, Serialize};

use super::Task;

/// One day of the plan.
///
/// Task order is assignment order, which is not necessarily input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    /// Tasks placed on this day.
    pub tasks: Vec<Task>,
}

impl Day {
    /// Creates an empty day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of task durations (hours).
    pub fn total_hours(&self) -> f64 {
        self.tasks.iter().map(|t| t.duration).sum()
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task was placed on this day.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// A complete day-by-day plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Days in calendar order.
    pub days: Vec<Day>,
}

/// A flattened `(day, task)` record, used for tabular export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRow<'a> {
    /// 1-based day number.
    pub day: usize,
    /// Task description.
    pub description: &'a str,
    /// Task duration (hours).
    pub hours: f64,
}

impl Schedule {
    /// Creates a schedule with `total_days` empty days.
    pub fn with_days(total_days: usize) -> Self {
        Self {
            days: vec![Day::new(); total_days],
        }
    }

    /// Appends a task to the given day (0-based).
    ///
    /// # Panics
    /// Panics if `day` is out of range.
    pub fn place(&mut self, day: usize, task: Task) {
        self.days[day].tasks.push(task);
    }

    /// Returns a day by 0-based index.
    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    /// All days in calendar order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Planning horizon length.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Number of tasks across all days.
    pub fn task_count(&self) -> usize {
        self.days.iter().map(Day::len).sum()
    }

    /// Sum of all task durations (hours).
    pub fn total_hours(&self) -> f64 {
        self.days.iter().map(Day::total_hours).sum()
    }

    /// Per-day load (hours), in calendar order.
    pub fn day_totals(&self) -> Vec<f64> {
        self.days.iter().map(Day::total_hours).collect()
    }

    /// 0-based indices of days whose load exceeds `capacity` by more than 0.01h.
    pub fn overloaded_days(&self, capacity: f64) -> Vec<usize> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.total_hours() > capacity + 0.01)
            .map(|(i, _)| i)
            .collect()
    }

    /// One row per task with a 1-based day number. Empty days produce no rows.
    pub fn rows(&self) -> impl Iterator<Item = PlanRow<'_>> {
        self.days.iter().enumerate().flat_map(|(i, day)| {
            day.tasks.iter().map(move |t| PlanRow {
                day: i + 1,
                description: &t.description,
                hours: t.duration,
            })
        })
    }
}
