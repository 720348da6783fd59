//! Domain layer for muatan: goods, carriers, workers and the loading transaction

pub mod model;
pub mod service;
pub mod validate;

pub use model::{Carrier, Good, Staging, Valuable, Worker};
pub use service::{CompletedTransaction, LoadOutcome, LoadingSummary, LoadingTransaction};
