//! Loading transaction: loads staged goods in order, then reports

use chrono::{DateTime, Utc};
use muatan_types::{CapacityExceeded, LoadGrade};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{Carrier, Good, Staging, Valuable, Worker};

/// Result of trying to load one staged good
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded {
        good: Good,
    },
    Rejected {
        good: Good,
        #[serde(serialize_with = "serialize_reason")]
        reason: CapacityExceeded,
    },
}

fn serialize_reason<S: serde::Serializer>(reason: &CapacityExceeded, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&reason.to_string())
}

impl LoadOutcome {
    pub fn good(&self) -> &Good {
        match self {
            LoadOutcome::Loaded { good } | LoadOutcome::Rejected { good, .. } => good,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

/// Loading phase. Consumed by [`LoadingTransaction::run`], so a finished
/// transaction can never go back to loading.
#[derive(Debug, Clone)]
pub struct LoadingTransaction {
    worker: Worker,
    carrier: Carrier,
}

impl LoadingTransaction {
    pub fn new(worker: Worker, carrier: Carrier) -> Self {
        Self { worker, carrier }
    }

    /// Try every staged good in arrival order. Goods that do not fit are
    /// recorded as rejected and loading continues with the next one.
    pub fn run(mut self, staged: &Staging<Good>) -> CompletedTransaction {
        let mut outcomes = Vec::with_capacity(staged.len());

        for good in staged {
            match self.carrier.accept_good(good) {
                Ok(()) => {
                    debug!(good = good.name(), weight = good.weight(), "loaded");
                    outcomes.push(LoadOutcome::Loaded { good: good.clone() });
                }
                Err(reason) => {
                    debug!(good = good.name(), weight = good.weight(), "rejected: {}", reason);
                    outcomes.push(LoadOutcome::Rejected {
                        good: good.clone(),
                        reason,
                    });
                }
            }
        }

        info!(
            staged = staged.len(),
            loaded = self.carrier.goods().len(),
            used = self.carrier.total_weight(),
            "loading finished"
        );

        CompletedTransaction {
            worker: self.worker,
            carrier: self.carrier,
            outcomes,
            completed_at: Utc::now(),
        }
    }
}

/// Summarized phase: read-only view of a finished loading run
#[derive(Debug, Clone)]
pub struct CompletedTransaction {
    worker: Worker,
    carrier: Carrier,
    outcomes: Vec<LoadOutcome>,
    completed_at: DateTime<Utc>,
}

/// One row of the loaded-goods listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedGoodLine {
    pub name: String,
    pub weight: f64,
    pub unit_price: f64,
    pub value: f64,
}

/// Financial summary of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingSummary {
    pub carrier_type: String,
    pub capacity_max: f64,
    pub worker_name: String,
    pub rate_per_weight: f64,
    pub loaded: Vec<LoadedGoodLine>,
    pub rejected: Vec<String>,
    pub total_weight: f64,
    pub remaining_capacity: f64,
    pub total_value: f64,
    pub service_cost: f64,
    pub utilization_percent: f64,
    pub profit: f64,
    pub grade: LoadGrade,
    pub completed_at: DateTime<Utc>,
}

impl CompletedTransaction {
    pub fn outcomes(&self) -> &[LoadOutcome] {
        &self.outcomes
    }

    pub fn carrier(&self) -> &Carrier {
        &self.carrier
    }

    pub fn summarize(&self) -> LoadingSummary {
        let total_weight = self.carrier.total_weight();
        let total_value = self.carrier.total_value();
        let service_cost = self.worker.service_cost(total_weight);
        let utilization_percent = self.carrier.utilization_percent();

        LoadingSummary {
            carrier_type: self.carrier.kind().to_string(),
            capacity_max: self.carrier.capacity_max(),
            worker_name: self.worker.name().to_string(),
            rate_per_weight: self.worker.rate_per_weight(),
            loaded: self
                .carrier
                .goods()
                .iter()
                .map(|g| LoadedGoodLine {
                    name: g.name().to_string(),
                    weight: g.weight(),
                    unit_price: g.unit_price(),
                    value: g.value(),
                })
                .collect(),
            rejected: self
                .outcomes
                .iter()
                .filter(|o| !o.is_loaded())
                .map(|o| o.good().name().to_string())
                .collect(),
            total_weight,
            remaining_capacity: self.carrier.remaining_capacity(),
            total_value,
            service_cost,
            utilization_percent,
            profit: total_value - service_cost,
            grade: LoadGrade::from_ratio(utilization_percent / 100.0),
            completed_at: self.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(goods: &[(&str, f64, f64)]) -> Staging<Good> {
        goods
            .iter()
            .map(|(n, w, p)| Good::new(*n, *w, *p).unwrap())
            .collect()
    }

    fn transaction(capacity: f64, rate: f64) -> LoadingTransaction {
        LoadingTransaction::new(
            Worker::new("Budi", rate).unwrap(),
            Carrier::new("Expedition Truck", capacity).unwrap(),
        )
    }

    #[test]
    fn test_rejects_oversized_good_and_summarizes() {
        let done = transaction(500.0, 5000.0).run(&staged(&[("A", 100.0, 10.0), ("B", 450.0, 20.0)]));

        assert_eq!(done.outcomes().len(), 2);
        assert!(done.outcomes()[0].is_loaded());
        match &done.outcomes()[1] {
            LoadOutcome::Rejected { good, reason } => {
                assert_eq!(good.name(), "B");
                assert!((reason.used - 100.0).abs() < 1e-6);
            }
            other => panic!("expected rejection, got {:?}", other),
        }

        let summary = done.summarize();
        assert!((summary.total_weight - 100.0).abs() < 1e-6);
        assert!((summary.remaining_capacity - 400.0).abs() < 1e-6);
        assert!((summary.total_value - 1000.0).abs() < 1e-6);
        assert!((summary.service_cost - 500_000.0).abs() < 1e-6);
        assert!((summary.profit - -499_000.0).abs() < 1e-6);
        assert!((summary.utilization_percent - 20.0).abs() < 1e-6);
        assert_eq!(summary.grade, LoadGrade::TooLight);
        assert_eq!(summary.rejected, vec!["B".to_string()]);
        assert_eq!(summary.loaded.len(), 1);
    }

    #[test]
    fn test_both_goods_fit() {
        let done = transaction(500.0, 5000.0).run(&staged(&[("A", 200.0, 10.0), ("B", 200.0, 20.0)]));
        let summary = done.summarize();
        assert!(done.outcomes().iter().all(LoadOutcome::is_loaded));
        assert!((summary.total_weight - 400.0).abs() < 1e-6);
        assert!((summary.total_value - 6000.0).abs() < 1e-6);
        assert!(summary.rejected.is_empty());
    }

    #[test]
    fn test_first_fit_keeps_arrival_order() {
        // The small good after a rejected large one is still tried in turn.
        let done = transaction(100.0, 1.0).run(&staged(&[
            ("big", 150.0, 1.0),
            ("small", 40.0, 1.0),
            ("medium", 70.0, 1.0),
        ]));
        let loaded: Vec<_> = done.carrier().goods().iter().map(|g| g.name()).collect();
        assert_eq!(loaded, vec!["small"]);
        assert_eq!(done.summarize().rejected, vec!["big", "medium"]);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let goods: Vec<(&str, f64, f64)> = (1..=30).map(|i| ("g", (i % 7 + 1) as f64 * 13.5, 2.0)).collect();
        let done = transaction(250.0, 10.0).run(&staged(&goods));
        let carrier = done.carrier();
        assert!(carrier.total_weight() <= carrier.capacity_max());
        let summed: f64 = carrier.goods().iter().map(|g| g.weight()).sum();
        assert!((summed - carrier.total_weight()).abs() < 1e-6);

        let accepted_value: f64 = done
            .outcomes()
            .iter()
            .filter(|o| o.is_loaded())
            .map(|o| o.good().value())
            .sum();
        assert!((accepted_value - done.summarize().total_value).abs() < 1e-6);
    }

    #[test]
    fn test_empty_run() {
        let done = transaction(500.0, 5000.0).run(&Staging::new());
        let summary = done.summarize();
        assert!(done.outcomes().is_empty());
        assert_eq!(summary.total_weight, 0.0);
        assert_eq!(summary.profit, 0.0);
        assert_eq!(summary.utilization_percent, 0.0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let done = transaction(500.0, 5000.0).run(&staged(&[("A", 123.4, 5.5)]));
        assert_eq!(done.summarize(), done.summarize());
    }

    #[test]
    fn test_outcome_json_shape() {
        let done = transaction(10.0, 1.0).run(&staged(&[("A", 5.0, 1.0), ("B", 6.0, 1.0)]));
        let json = serde_json::to_value(done.outcomes()).unwrap();
        assert_eq!(json[0]["status"], "loaded");
        assert_eq!(json[1]["status"], "rejected");
        assert!(json[1]["reason"].as_str().unwrap().starts_with("Capacity full!"));
    }
}
