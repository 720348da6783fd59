//! Domain services

pub mod report;
pub mod transaction;

pub use report::{render_goods_listing, render_outcome, render_summary};
pub use transaction::{
    CompletedTransaction, LoadOutcome, LoadedGoodLine, LoadingSummary, LoadingTransaction,
};
