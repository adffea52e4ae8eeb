//! Binary smoke tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn planner() -> Command {
    Command::cargo_bin("study-planner").unwrap()
}

#[test]
fn plan_csv_balanced() {
    planner()
        .args([
            "plan", "-t", "A=3", "-t", "B=1", "-t", "C=2", "--days", "2", "--hours", "3", "--mode",
            "balanced", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout("Day,Description,EstimatedHours\n1,A,3.00\n2,C,2.00\n2,B,1.00\n");
}

#[test]
fn plan_splits_estimated_task() {
    planner()
        .args([
            "plan", "-t", "Read 5 chapters", "--days", "3", "--hours", "3", "--format", "csv",
        ])
        .assert()
        .success()
        .stdout(
            "Day,Description,EstimatedHours\n\
             1,Read 2 chapters,3.00\n\
             2,Read 2 chapters,3.00\n\
             3,Read 1 chapter,1.50\n",
        );
}

#[test]
fn plan_without_tasks_reports_nothing_to_schedule() {
    planner()
        .args(["plan", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to schedule"));
}

#[test]
fn plan_rejects_zero_capacity() {
    planner()
        .args(["plan", "-t", "A=1", "--hours", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Daily capacity must be at least 0.01 hours"));
}

#[test]
fn plan_rejects_zero_days() {
    planner()
        .args(["plan", "-t", "A=1", "--days", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 day"));
}

#[test]
fn plan_text_output() {
    planner()
        .args(["plan", "-t", "Deep focus block=5", "--days", "3", "--hours", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 3 schedule:\n - Deep focus block (1.00 hrs)"));
}

#[test]
fn plan_uses_goal_deadline_for_horizon() {
    planner()
        .args([
            "plan", "-t", "A=1", "--hours", "2", "--goal", "Learn graphs in 2 weeks", "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let value: serde_json::Value = serde_json::from_str(out).unwrap();
            value["schedule"]["days"].as_array().map(Vec::len) == Some(14)
        }));
}

#[test]
fn estimate_prints_hours() {
    planner()
        .args(["estimate", "Read 2 chapters", "Take a quiz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Read 2 chapters -> 3.00 hours"))
        .stdout(predicate::str::contains("Total: 3.75 hours"));
}
