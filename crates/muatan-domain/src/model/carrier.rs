//! The vehicle goods are loaded onto

use muatan_types::{CapacityExceeded, ValidationError};
use serde::Serialize;

use super::good::{Good, Valuable};
use crate::validate::{ensure_name, ensure_positive};

/// Relative slack for capacity checks, so decimal weights that fill the
/// carrier exactly are not rejected over f64 rounding.
const CAPACITY_EPSILON: f64 = 1e-9;

/// A carrier with a fixed weight capacity.
///
/// `capacity_used` equals the summed weight of `goods` (up to f64 rounding)
/// and never exceeds `capacity_max`; `accept_good` is the only mutator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carrier {
    kind: String,
    capacity_max: f64,
    capacity_used: f64,
    goods: Vec<Good>,
}

impl Carrier {
    pub fn new(kind: impl Into<String>, capacity_max: f64) -> Result<Self, ValidationError> {
        let kind = kind.into();
        ensure_name("carrier type", &kind)?;
        let capacity_max = ensure_positive("capacity", capacity_max)?;
        Ok(Self {
            kind,
            capacity_max,
            capacity_used: 0.0,
            goods: Vec::new(),
        })
    }

    /// Load `good` if it fits in the remaining capacity. A good that fills
    /// the carrier exactly is accepted. On rejection nothing changes.
    pub fn accept_good(&mut self, good: &Good) -> Result<(), CapacityExceeded> {
        let overflow = self.capacity_used + good.weight() - self.capacity_max;
        if overflow > CAPACITY_EPSILON * self.capacity_max.max(1.0) {
            return Err(CapacityExceeded {
                good: good.name().to_string(),
                weight: good.weight(),
                used: self.capacity_used,
                max: self.capacity_max,
            });
        }
        self.goods.push(good.clone());
        self.capacity_used = (self.capacity_used + good.weight()).min(self.capacity_max);
        Ok(())
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn capacity_max(&self) -> f64 {
        self.capacity_max
    }

    /// Same as `capacity_used`
    pub fn total_weight(&self) -> f64 {
        self.capacity_used
    }

    pub fn remaining_capacity(&self) -> f64 {
        (self.capacity_max - self.capacity_used).max(0.0)
    }

    pub fn goods(&self) -> &[Good] {
        &self.goods
    }

    pub fn total_value(&self) -> f64 {
        self.goods.iter().map(|g| g.value()).sum()
    }

    pub fn utilization_percent(&self) -> f64 {
        (self.capacity_used / self.capacity_max) * 100.0
    }
}
