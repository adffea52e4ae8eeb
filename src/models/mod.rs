//! Study planning domain models.
//!
//! Provides the data types that flow through the planner: tasks, the unit
//! measures recognized inside their descriptions, and the day-by-day schedule.
//!
//! # Data Flow
//!
//! | Stage | Input | Output |
//! |-------|-------|--------|
//! | Estimator | description | `Task` |
//! | Normalizer | `Task` | `Task` chunks (each fits one day) |
//! | Allocator | `Task` chunks | `Schedule` of `Day`s |

mod schedule;
mod task;
mod unit;

pub use schedule::{Day, PlanRow, Schedule};
pub use task::{round_hours, Task};
pub use unit::{TaskShape, Unit, UnitMeasure};
