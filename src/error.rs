// ---------------------------------------------------------------------------
// Errors for parameter handling, simulation and export
// ---------------------------------------------------------------------------

use thiserror::Error;

/// Errors surfaced by the flight engine and its collaborators
#[derive(Error, Debug)]
pub enum SimError {
    #[error("invalid value for {field}: '{value}' is not a finite number")]
    Validation { field: &'static str, value: String },

    #[error("{field} must be {constraint}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("time step must be positive, got {time_step}")]
    NonTerminationRisk { time_step: f64 },

    #[error("simulation did not land within {limit} steps")]
    StepLimitExceeded { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
