//! Error types for step-calories

use thiserror::Error;

/// Errors that can occur while parsing a record or computing a report
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid record format: expected {expected} comma-separated fields, got {actual}")]
    FormatError { expected: usize, actual: usize },

    #[error("Failed to parse {field}: {reason}")]
    ParseError { field: &'static str, reason: String },

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Invalid model configuration: {0}")]
    ConfigError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Coarse classification of a [`ComputeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Parse,
    Validation,
    Config,
}

impl ComputeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComputeError::FormatError { .. } => ErrorKind::Format,
            ComputeError::ParseError { .. } => ErrorKind::Parse,
            ComputeError::ValidationError(_) => ErrorKind::Validation,
            ComputeError::ConfigError(_) | ComputeError::JsonError(_) => ErrorKind::Config,
        }
    }
}

/// Domain constraint violations on successfully parsed values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("step count must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    #[error("height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(String),

    #[error("mean speed must be positive, got {0}")]
    NonPositiveSpeed(f64),

    #[error("calories burned must be a positive finite number, got {0}")]
    NonPositiveCalories(f64),

    #[error("unknown activity type: {0}")]
    UnknownActivity(String),
}
