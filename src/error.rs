//! Planner error types

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while planning or exporting
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid planning input: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Check if this error came from input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PlanError::Invalid(_))
    }

    /// Validation errors carried by this error, if any
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            PlanError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for PlanError {
    fn from(errors: Vec<ValidationError>) -> Self {
        PlanError::Invalid(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for planner operations
pub type Result<T> = std::result::Result<T, PlanError>;
