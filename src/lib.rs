//! Capacity-constrained study planning.
//!
//! Turns a list of estimated study tasks into a day-by-day plan that
//! respects a daily time budget over a fixed horizon.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Unit`, `UnitMeasure`, `Day`, `Schedule`
//! - **`normalizer`**: Splits tasks longer than one day into chunks that fit
//! - **`scheduler`**: Greedy day allocation (`Balanced`, `Compact`) and plan KPIs
//! - **`validation`**: Precondition checks (capacity, horizon, durations)
//! - **`planner`**: Validate → normalize → allocate pipeline
//! - **`estimator`**: Duration heuristics from task descriptions
//! - **`intake`**: Goal deadline parsing and task list loading
//! - **`export`**: CSV, JSON, and text output
//! - **`config`**: YAML configuration
//!
//! # Architecture
//!
//! The normalizer and allocator are pure, synchronous functions with no
//! shared state; each call builds its own accumulators. Estimation, intake,
//! and export sit around them as thin I/O layers.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Coffman, Garey & Johnson (1996), "Approximation Algorithms for Bin Packing: A Survey"

pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod export;
pub mod intake;
pub mod models;
pub mod normalizer;
pub mod planner;
pub mod scheduler;
pub mod validation;

pub use error::{PlanError, Result};
