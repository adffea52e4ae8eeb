//! End-to-end planning: validate, normalize, allocate.
//!
//! # Pipeline
//!
//! 1. Validate capacity, horizon, and task durations.
//! 2. Short-circuit on an empty task list.
//! 3. Split oversized tasks so each chunk fits one day.
//! 4. Allocate chunks to days with the requested mode.
//! 5. Compute plan KPIs.

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{Schedule, Task};
use crate::normalizer::normalize;
use crate::scheduler::{AllocationMode, DayAllocator, PlanKpi};
use crate::validation::validate_input;

/// Input container for a planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Estimated tasks.
    pub tasks: Vec<Task>,
    /// Planning horizon (days).
    pub total_days: usize,
    /// Hours available per day.
    pub capacity: f64,
    /// Day selection policy.
    pub mode: AllocationMode,
}

impl PlanRequest {
    /// Creates a new request in compact mode.
    pub fn new(tasks: Vec<Task>, total_days: usize, capacity: f64) -> Self {
        Self {
            tasks,
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
}

/// A finished plan.
#[derive(Debug, Clone, Serialize)]
pub struct StudyPlan {
    /// Tasks after splitting, in normalizer output order.
    pub normalized: Vec<Task>,
    /// Day-by-day assignment.
    pub schedule: Schedule,
    /// Load indicators.
    pub kpi: PlanKpi,
    /// Hours per day the plan was built for.
    pub capacity: f64,
    /// Selection policy used.
    pub mode: AllocationMode,
}

/// Result of a planning run.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    /// No tasks were supplied; nothing was normalized or allocated.
    NothingToSchedule,
    /// A plan was produced.
    Planned(StudyPlan),
}

impl PlanOutcome {
    /// The plan, if one was produced.
    pub fn plan(&self) -> Option<&StudyPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::NothingToSchedule => None,
        }
    }

    /// Consumes the outcome, returning the plan if one was produced.
    pub fn into_plan(self) -> Option<StudyPlan> {
        match self {
            PlanOutcome::Planned(plan) => Some(plan),
            PlanOutcome::NothingToSchedule => None,
        }
    }
}

/// Runs a planning request.
///
/// Invalid capacity, horizon, or durations yield
/// [`PlanError::Invalid`](crate::error::PlanError::Invalid) and no schedule.
///
/// # Example
///
/// ```
/// use study_planner::models::Task;
/// use study_planner::planner::{plan, PlanRequest};
/// use study_planner::scheduler::AllocationMode;
///
/// let request = PlanRequest::new(vec![Task::new("Read 5 chapters", 7.5)], 3, 3.0)
///     .with_mode(AllocationMode::Balanced);
/// let outcome = plan(&request).unwrap();
/// let study_plan = outcome.plan().unwrap();
///
/// assert_eq!(study_plan.normalized.len(), 3);
/// assert_eq!(study_plan.schedule.task_count(), 3);
/// assert!(study_plan.kpi.within_capacity());
/// ```
pub fn plan(request: &PlanRequest) -> Result<PlanOutcome> {
    validate_input(&request.tasks, request.total_days, request.capacity)?;

    if request.tasks.is_empty() {
        info!("No tasks supplied, nothing to schedule");
        return Ok(PlanOutcome::NothingToSchedule);
    }

    let normalized = normalize(&request.tasks, request.capacity);
    let schedule = DayAllocator::new(request.total_days, request.capacity)
        .with_mode(request.mode)
        .allocate(&normalized);
    let kpi = PlanKpi::calculate(&schedule, request.capacity);

    info!(
        tasks = request.tasks.len(),
        chunks = normalized.len(),
        days = request.total_days,
        capacity = request.capacity,
        mode = %request.mode,
        utilization = kpi.utilization,
        "Built study plan"
    );

    Ok(PlanOutcome::Planned(StudyPlan {
        normalized,
        schedule,
        kpi,
        capacity: request.capacity,
        mode: request.mode,
    }))
}
