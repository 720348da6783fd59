//! Goods eligible for loading

use muatan_types::ValidationError;
use serde::Serialize;

use crate::validate::{ensure_name, ensure_non_negative, ensure_positive};

/// Anything with a name and a weight that can be valued
pub trait Valuable {
    fn name(&self) -> &str;
    fn weight(&self) -> f64;
    fn value(&self) -> f64;
}

/// A weighed, priced good. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Good {
    name: String,
    /// kg
    weight: f64,
    /// Price per kg
    unit_price: f64,
}

impl Good {
    pub fn new(name: impl Into<String>, weight: f64, unit_price: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        ensure_name("name", &name)?;
        let weight = ensure_positive("weight", weight)?;
        let unit_price = ensure_non_negative("unit price", unit_price)?;
        Ok(Self {
            name,
            weight,
            unit_price,
        })
    }

    /// Price per kg, exposed for reporting
    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn price_note(&self, currency: &str) -> String {
        format!("Unit price of {} is {} {}", self.name, currency, self.unit_price)
    }
}

impl Valuable for Good {
    fn name(&self) -> &str {
        &self.name
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn value(&self) -> f64 {
        self.weight * self.unit_price
    }
}
