//! Study Planner
//!
//! CLI entry point for estimating, splitting, and scheduling study tasks.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use tracing::{debug, info};

use study_planner::cli::{Cli, Command, OutputFormat};
use study_planner::config::PlannerConfig;
use study_planner::estimator::Estimator;
use study_planner::export::{render_text, write_csv, write_json};
use study_planner::intake::{load_task_file, parse_goal, parse_task_arg};
use study_planner::models::Task;
use study_planner::planner::{plan, PlanOutcome, PlanRequest};

fn setup_logging(verbose: bool) {
    // stdout carries the plan, so logs go to stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = PlannerConfig::load(cli.config.as_ref()).context("Failed to load configuration")?;
    debug!(
        "Loaded config: hours_per_day={}, total_days={}, mode={}",
        config.hours_per_day, config.total_days, config.mode
    );

    let estimator = Estimator::new(config.estimates.clone());

    match cli.command {
        Command::Plan {
            tasks,
            file,
            days,
            hours,
            mode,
            goal,
            format,
            output,
        } => {
            let tasks = collect_tasks(&tasks, file.as_ref(), &estimator)?;
            let total_days = resolve_days(days, goal.as_deref(), &config);
            let request = PlanRequest::new(tasks, total_days, hours.unwrap_or(config.hours_per_day))
                .with_mode(mode.unwrap_or(config.mode));
            cmd_plan(&request, format, output.as_ref())
        }
        Command::Estimate { descriptions } => cmd_estimate(&descriptions, &estimator),
    }
}

/// Gather tasks from --task arguments and an optional task file
fn collect_tasks(args: &[String], file: Option<&PathBuf>, estimator: &Estimator) -> Result<Vec<Task>> {
    let mut tasks: Vec<Task> = args.iter().map(|arg| parse_task_arg(arg, estimator)).collect();

    if let Some(path) = file {
        let loaded = load_task_file(path, estimator)
            .with_context(|| format!("Failed to load tasks from {}", path.display()))?;
        tasks.extend(loaded);
    }

    Ok(tasks)
}

/// Horizon: --days, then goal deadline, then config
fn resolve_days(days: Option<usize>, goal: Option<&str>, config: &PlannerConfig) -> usize {
    if let Some(days) = days {
        return days;
    }

    if let Some(text) = goal {
        let goal = parse_goal(text);
        if !goal.preferences.is_empty() {
            let styles: Vec<String> = goal.preferences.iter().map(|s| s.to_string()).collect();
            info!("Goal learning styles: {}", styles.join(", "));
        }
        if let Some(horizon) = goal.horizon_days() {
            info!("Using goal deadline for horizon: {} days", horizon);
            return horizon;
        }
    }

    config.total_days
}

fn cmd_plan(request: &PlanRequest, format: OutputFormat, output: Option<&PathBuf>) -> Result<()> {
    let outcome = plan(request).context("Failed to build study plan")?;

    let study_plan = match outcome {
        PlanOutcome::Planned(study_plan) => study_plan,
        PlanOutcome::NothingToSchedule => {
            println!("Nothing to schedule: no tasks were given.");
            return Ok(());
        }
    };

    let mut buffer = Vec::new();
    match format {
        OutputFormat::Text => buffer.extend_from_slice(render_text(&study_plan).as_bytes()),
        OutputFormat::Json => {
            write_json(&study_plan, &mut buffer)?;
            buffer.push(b'\n');
        }
        OutputFormat::Csv => write_csv(&study_plan.schedule, &mut buffer)?,
    }

    match output {
        Some(path) => {
            fs::write(path, &buffer).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Plan written to {}", path.display());
        }
        None => io::stdout().write_all(&buffer)?,
    }

    Ok(())
}

fn cmd_estimate(descriptions: &[String], estimator: &Estimator) -> Result<()> {
    let mut total = 0.0;
    for description in descriptions {
        let hours = estimator.estimate(description);
        total += hours;
        println!("{} -> {:.2} hours", description, hours);
    }
    if descriptions.len() > 1 {
        println!("Total: {:.2} hours", total);
    }
    Ok(())
}
