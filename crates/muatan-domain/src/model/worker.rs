//! The worker who charges per kg for loading

use muatan_types::ValidationError;
use serde::Serialize;

use crate::validate::{ensure_name, ensure_non_negative};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Worker {
    name: String,
    rate_per_weight: f64,
}

impl Worker {
    pub fn new(name: impl Into<String>, rate_per_weight: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_name("worker name", &name)?;
        let rate_per_weight = ensure_non_negative("rate per kg", rate_per_weight)?;
        Ok(Self {
            name,
            rate_per_weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rate_per_weight(&self) -> f64 {
        self.rate_per_weight
    }

    /// Fee for loading `total_weight` kg
    pub fn service_cost(&self, total_weight: f64) -> f64 {
        total_weight * self.rate_per_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_cost() {
        let worker = Worker::new("Budi", 5000.0).unwrap();
        assert!((worker.service_cost(100.0) - 500_000.0).abs() < 1e-6);
        assert_eq!(worker.service_cost(0.0), 0.0);
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(Worker::new("Budi", -1.0).is_err());
    }
}
