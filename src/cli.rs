//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::scheduler::AllocationMode;

/// Study Planner - split study tasks and pack them into days
#[derive(Parser)]
#[command(
    name = "study-planner",
    about = "Turn estimated study tasks into a day-by-day plan",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Build a day-by-day plan
    Plan {
        /// Task as DESCRIPTION or DESCRIPTION=HOURS (repeatable)
        #[arg(short, long = "task", value_name = "TASK")]
        tasks: Vec<String>,

        /// YAML or JSON task list file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Planning horizon in days
        #[arg(short, long)]
        days: Option<usize>,

        /// Daily study budget in hours
        #[arg(long)]
        hours: Option<f64>,

        /// Day selection policy (balanced, compact)
        #[arg(short, long)]
        mode: Option<AllocationMode>,

        /// Goal statement; its deadline sets the horizon when --days is absent
        #[arg(short, long)]
        goal: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate task durations without planning
    Estimate {
        /// Task descriptions
        #[arg(required = true)]
        descriptions: Vec<String>,
    },
}

/// Output format for plans
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown format: {}. Use: text, json, or csv", s)),
        }
    }
}
