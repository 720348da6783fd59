//! Core types for cargo loading

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How well the carrier capacity was used
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadGrade {
    /// Under 80%
    TooLight,
    /// 80-90%
    Light,
    /// 90-95%
    JustRight,
    /// 95-100%
    Full,
}

impl LoadGrade {
    /// Grade a used/max ratio. Loading never exceeds capacity, so anything
    /// from 95% upward is `Full`.
    pub fn from_ratio(ratio: f64) -> Self {
        match ratio {
            r if r < 0.80 => LoadGrade::TooLight,
            r if r < 0.90 => LoadGrade::Light,
            r if r < 0.95 => LoadGrade::JustRight,
            _ => LoadGrade::Full,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadGrade::TooLight => "too light",
            LoadGrade::Light => "light",
            LoadGrade::JustRight => "just right",
            LoadGrade::Full => "full",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(LoadGrade::from_ratio(0.0), LoadGrade::TooLight);
        assert_eq!(LoadGrade::from_ratio(0.2), LoadGrade::TooLight);
        assert_eq!(LoadGrade::from_ratio(0.80), LoadGrade::Light);
        assert_eq!(LoadGrade::from_ratio(0.90), LoadGrade::JustRight);
        assert_eq!(LoadGrade::from_ratio(0.95), LoadGrade::Full);
        assert_eq!(LoadGrade::from_ratio(1.0), LoadGrade::Full);
    }

    #[test]
    fn test_capacity_exceeded_message() {
        let err = CapacityExceeded {
            good: "B".to_string(),
            weight: 450.0,
            used: 100.0,
            max: 500.0,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Capacity full!"));
        assert!(msg.contains("B (450 kg)"));
        assert!(msg.contains("100 of 500 kg"));
    }

    #[test]
    fn test_validation_converts_to_error() {
        let err: Error = ValidationError::EmptyName {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Invalid input: name must not be empty");
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
