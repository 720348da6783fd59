//! Error types for muatan

use thiserror::Error;

/// Raised when a good would push the carrier past its maximum capacity.
///
/// This is the only failure that can happen while loading; callers report it
/// and move on to the next good.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Capacity full! {good} ({weight} kg) cannot be loaded: {used} of {max} kg already used")]
pub struct CapacityExceeded {
    pub good: String,
    pub weight: f64,
    pub used: f64,
    pub max: f64,
}

/// Invalid values coming from the console or from configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: String, value: String },

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: String, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    #[error("{field} must not be empty")]
    EmptyName { field: String },

    #[error("input ended while reading {field}")]
    UnexpectedEof { field: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
