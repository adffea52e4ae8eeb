//! Greedy day allocation and plan KPIs.
//!
//! # Algorithm
//!
//! `DayAllocator` is a bounded-time bin-packing heuristic, not an optimal
//! packer. `Balanced` mode approximates longest-processing-time-first;
//! `Compact` mode is plain first-fit in input order.
//!
//! # KPI
//!
//! `PlanKpi` reports day loads, utilization, and capacity overflow.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"

mod allocator;
mod kpi;

pub use allocator::{AllocationMode, DayAllocator, FIT_TOLERANCE};
pub use kpi::PlanKpi;
