//! Planner configuration types and loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::estimator::EstimateTable;
use crate::scheduler::AllocationMode;

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = ".study-planner.yml";

/// Main planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlannerConfig {
    /// Daily study budget in hours
    pub hours_per_day: f64,

    /// Planning horizon in days, used when no goal deadline is given
    pub total_days: usize,

    /// Day selection policy
    pub mode: AllocationMode,

    /// Duration estimate rates
    pub estimates: EstimateTable,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            hours_per_day: 4.0,
            total_days: 7,
            mode: AllocationMode::Compact,
            estimates: EstimateTable::default(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration with fallback chain
    ///
    /// explicit path → `./.study-planner.yml` → `<config dir>/study-planner/study-planner.yml` → defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("study-planner").join("study-planner.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: Self = serde_yaml::from_str(&content)?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
