//! Plain-text rendering of loading results

use crate::model::Valuable;
use crate::service::transaction::{LoadOutcome, LoadingSummary};

/// One line per staged good, as printed while loading
pub fn render_outcome(outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::Loaded { good } => format!("{} loaded.", good.name()),
        LoadOutcome::Rejected { reason, .. } => format!("ERROR: {}", reason),
    }
}

pub fn render_goods_listing(summary: &LoadingSummary, currency: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("\t\tGOODS IN {}\n", summary.carrier_type.to_uppercase()));
    if summary.loaded.is_empty() {
        out.push_str("  (nothing loaded)\n");
        out.push_str(&"-".repeat(37));
        out.push('\n');
        return out;
    }
    for line in &summary.loaded {
        out.push_str(&format!("Name        : {}\n", line.name));
        out.push_str(&format!("Weight      : {} kg\n", line.weight));
        out.push_str(&format!("Price/kg    : {} {}\n", currency, line.unit_price));
        out.push_str(&format!("Total value : {} {}\n", currency, line.value));
        out.push_str(&"-".repeat(37));
        out.push('\n');
    }
    out
}

/// Summary block: all figures to two decimals, profit last
pub fn render_summary(summary: &LoadingSummary, currency: &str) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("ECONOMIC SUMMARY\n");
    out.push_str(&format!("Total weight        : {:.2} kg\n", summary.total_weight));
    out.push_str(&format!("Remaining capacity  : {:.2} kg\n", summary.remaining_capacity));
    out.push_str(&format!("Total value         : {} {:.2}\n", currency, summary.total_value));
    out.push_str(&format!("Loading cost        : {} {:.2}\n", currency, summary.service_cost));
    out.push_str(&format!(
        "Capacity utilization: {:.2}% ({})\n",
        summary.utilization_percent,
        summary.grade.label()
    ));
    if !summary.rejected.is_empty() {
        out.push_str(&format!("Not loaded          : {}\n", summary.rejected.join(", ")));
    }
    out.push_str(&"-".repeat(33));
    out.push('\n');
    out.push_str(&format!("PROFIT              : {} {:.2}\n", currency, summary.profit));
    out
}
