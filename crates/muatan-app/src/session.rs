//! One console loading session: collect goods, load them, summarize

use muatan_domain::{LoadOutcome, LoadingSummary, LoadingTransaction};
use muatan_types::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

use crate::config::Config;
use crate::input::collect_goods;

/// Everything a finished session produced, ready for output
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub outcomes: Vec<LoadOutcome>,
    pub summary: LoadingSummary,
}

/// Run a full session. Worker and carrier come from `config` and stay fixed
/// for the run; only the goods are read from `input`. Prompts go to `out`.
pub fn run_session<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<SessionReport> {
    let worker = config.worker()?;
    let carrier = config.carrier()?;
    info!(
        worker = worker.name(),
        carrier = carrier.kind(),
        capacity = carrier.capacity_max(),
        "session started"
    );

    let staged = collect_goods(input, out)?;
    let done = LoadingTransaction::new(worker, carrier).run(&staged);
    let summary = done.summarize();
    info!(
        total_value = summary.total_value,
        service_cost = summary.service_cost,
        profit = summary.profit,
        "summary computed"
    );

    Ok(SessionReport {
        outcomes: done.outcomes().to_vec(),
        summary,
    })
}
