//! Plan quality metrics (KPIs).
//!
//! Computes load indicators for a completed schedule against the daily
//! capacity it was built for.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Max Load | Heaviest day (hours) |
//! | Min Load | Lightest day (hours), empty days included |
//! | Load Spread | Max load − min load |
//! | Utilization | Total hours / (days × capacity) |
//! | Active Days | Days with at least one task |
//! | Overflow Hours | Sum of max(0, load − capacity) |

use serde::Serialize;

use crate::models::Schedule;

/// Tolerance used when flagging a day as over capacity (hours).
const CAPACITY_TOLERANCE: f64 = 0.01;

/// Schedule load indicators. All time values are in hours.
#[derive(Debug, Clone, Serialize)]
pub struct PlanKpi {
    /// Sum of all task durations.
    pub total_hours: f64,
    /// Heaviest day.
    pub max_day_hours: f64,
    /// Lightest day.
    pub min_day_hours: f64,
    /// Mean load per day over the whole horizon.
    pub mean_day_hours: f64,
    /// Fraction of available hours used (may exceed 1.0 on overflow).
    pub utilization: f64,
    /// Number of non-empty days.
    pub active_days: usize,
    /// Hours placed beyond capacity, summed over days.
    pub overflow_hours: f64,
    /// 0-based indices of days over capacity.
    pub overloaded_days: Vec<usize>,
}

impl PlanKpi {
    /// Computes KPIs from a schedule and the capacity it was built for.
    pub fn calculate(schedule: &Schedule, capacity: f64) -> Self {
        let totals = schedule.day_totals();
        let total_hours: f64 = totals.iter().sum();

        let max_day_hours = totals.iter().copied().fold(0.0, f64::max);
        let min_day_hours = if totals.is_empty() {
            0.0
        } else {
            totals.iter().copied().fold(f64::INFINITY, f64::min)
        };

        let mean_day_hours = if totals.is_empty() {
            0.0
        } else {
            total_hours / totals.len() as f64
        };

        let available = totals.len() as f64 * capacity;
        let utilization = if available > 0.0 {
            total_hours / available
        } else {
            0.0
        };

        let overflow_hours: f64 = totals
            .iter()
            .map(|t| (t - capacity).max(0.0))
            .filter(|excess| *excess > CAPACITY_TOLERANCE)
            .sum();

        Self {
            total_hours,
            max_day_hours,
            min_day_hours,
            mean_day_hours,
            utilization,
            active_days: schedule.days().iter().filter(|d| !d.is_empty()).count(),
            overflow_hours,
            overloaded_days: schedule.overloaded_days(capacity),
        }
    }

    /// Max load − min load.
    pub fn load_spread(&self) -> f64 {
        self.max_day_hours - self.min_day_hours
    }

    /// Whether every day respects capacity (within 0.01h).
    pub fn within_capacity(&self) -> bool {
        self.overloaded_days.is_empty()
    }
}
