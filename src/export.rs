//! Plan presentation and persistence.
//!
//! # CSV Layout
//!
//! | Column | Content |
//! |--------|---------|
//! | `Day` | 1-based day number |
//! | `Description` | Task description |
//! | `EstimatedHours` | Duration, two decimals |
//!
//! One row per task; empty days produce no rows. Lines end with `\n`, so
//! the same schedule always produces the same bytes.

use std::io;

use crate::error::Result;
use crate::models::Schedule;
use crate::planner::StudyPlan;

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["Day", "Description", "EstimatedHours"];

/// Writes the schedule as CSV.
///
/// # Example
/// ```
/// use study_planner::export::write_csv;
/// use study_planner::models::{Schedule, Task};
///
/// let mut schedule = Schedule::with_days(2);
/// schedule.place(1, Task::new("Read 1 chapter", 1.5));
///
/// let mut out = Vec::new();
/// write_csv(&schedule, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Day,Description,EstimatedHours\n2,Read 1 chapter,1.50\n"
/// );
/// ```
pub fn write_csv<W: io::Write>(schedule: &Schedule, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for row in schedule.rows() {
        wtr.write_record([
            row.day.to_string(),
            row.description.to_string(),
            format_hours(row.hours),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the full plan (chunks, schedule, KPIs) as pretty JSON.
pub fn write_json<W: io::Write>(plan: &StudyPlan, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}

/// Renders a human-readable day-by-day listing.
pub fn render_text(plan: &StudyPlan) -> String {
    let mut out = String::new();

    for (i, day) in plan.schedule.days().iter().enumerate() {
        out.push_str(&format!("Day {} schedule:\n", i + 1));
        if day.is_empty() {
            out.push_str("  (free)\n");
            continue;
        }
        for task in &day.tasks {
            out.push_str(&format!(
                " - {} ({} hrs)\n",
                task.description,
                format_hours(task.duration)
            ));
        }
        let total = day.total_hours();
        let marker = if total > plan.capacity + 0.01 { " (over capacity)" } else { "" };
        out.push_str(&format!("  Total: {} hours{}\n", format_hours(total), marker));
    }

    let kpi = &plan.kpi;
    out.push_str(&format!(
        "\n{} hours over {} of {} days ({} mode, {:.0}% of capacity)\n",
        format_hours(kpi.total_hours),
        kpi.active_days,
        plan.schedule.day_count(),
        plan.mode,
        kpi.utilization * 100.0
    ));
    if !kpi.within_capacity() {
        out.push_str(&format!(
            "Warning: {} hours do not fit the horizon and were added to the last day\n",
            format_hours(kpi.overflow_hours)
        ));
    }

    out
}

fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::planner::{plan, PlanRequest};
    use crate::scheduler::AllocationMode;

    fn sample_plan(tasks: Vec<Task>, days: usize) -> StudyPlan {
        let request = PlanRequest::new(tasks, days, 3.0).with_mode(AllocationMode::Balanced);
        plan(&request).unwrap().into_plan().unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let plan = sample_plan(
            vec![Task::new("A", 3.0), Task::new("B", 1.0), Task::new("C", 2.0)],
            3,
        );
        let mut out = Vec::new();
        write_csv(&plan.schedule, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Day,Description,EstimatedHours\n1,A,3.00\n2,C,2.00\n3,B,1.00\n"
        );
    }

    #[test]
    fn test_csv_quotes_commas() {
        let mut schedule = Schedule::with_days(1);
        schedule.place(0, Task::new("Read, then summarize", 0.5));
        let mut out = Vec::new();
        write_csv(&schedule, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .ends_with("1,\"Read, then summarize\",0.50\n"));
    }

    #[test]
    fn test_csv_empty_schedule_has_header_only() {
        let mut out = Vec::new();
        write_csv(&Schedule::with_days(2), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Day,Description,EstimatedHours\n");
    }

    #[test]
    fn test_csv_is_reproducible() {
        let plan = sample_plan(vec![Task::new("Read 7 chapters", 10.0)], 4);
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_csv(&plan.schedule, &mut first).unwrap();
        write_csv(&plan.schedule, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_contains_schedule_and_kpi() {
        let plan = sample_plan(vec![Task::new("A", 1.0)], 1);
        let mut out = Vec::new();
        write_json(&plan, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schedule"]["days"][0]["tasks"][0]["description"], "A");
        assert_eq!(value["mode"], "balanced");
        assert!(value["kpi"]["utilization"].is_number());
    }

    #[test]
    fn test_render_text() {
        let plan = sample_plan(vec![Task::new("A", 3.0)], 2);
        let text = render_text(&plan);
        assert!(text.contains("Day 1 schedule:\n - A (3.00 hrs)\n  Total: 3.00 hours\n"));
        assert!(text.contains("Day 2 schedule:\n  (free)\n"));
        assert!(text.contains("balanced mode, 50% of capacity"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_render_text_lists_every_line() {
        let plan = sample_plan(vec![Task::new("A", 2.0), Task::new("B", 1.0)], 1);
        assert_eq!(
            render_text(&plan),
            "Day 1 schedule:\n - A (2.00 hrs)\n - B (1.00 hrs)\n  Total: 3.00 hours\n\
             \n3.00 hours over 1 of 1 days (balanced mode, 100% of capacity)\n"
        );
    }

    #[test]
    fn test_render_text_overflow_warning() {
        let plan = sample_plan(vec![Task::new("X", 10.0)], 1);
        let text = render_text(&plan);
        assert!(text.contains("(over capacity)"));
        assert!(text.contains("Warning: 7.00 hours"));
    }
}
