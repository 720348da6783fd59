//! Output formatting module

use muatan_app::SessionReport;
use muatan_domain::service::{render_goods_listing, render_outcome, render_summary};
use muatan_types::{OutputFormat, Result};
use std::io::Write;

pub struct ReportOptions<'a> {
    pub format: OutputFormat,
    pub currency: &'a str,
    pub show_prices: bool,
}

pub fn write_report<W: Write>(out: &mut W, report: &SessionReport, options: &ReportOptions<'_>) -> Result<()> {
    if options.format == OutputFormat::Json {
        writeln!(out)?;
        let content = serde_json::to_string_pretty(report)?;
        writeln!(out, "{}", content)?;
        return Ok(());
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(
        out,
        "Worker: {} | Fee per kg: {} {}",
        summary.worker_name, options.currency, summary.rate_per_weight
    )?;
    writeln!(
        out,
        "Carrier: {} | Capacity: {} kg",
        summary.carrier_type, summary.capacity_max
    )?;

    writeln!(out)?;
    writeln!(out, "\t\tLOADING")?;
    for outcome in &report.outcomes {
        writeln!(out, "{}", render_outcome(outcome))?;
    }

    write!(out, "{}", render_goods_listing(summary, options.currency))?;

    if options.show_prices {
        writeln!(out)?;
        for outcome in report.outcomes.iter().filter(|o| o.is_loaded()) {
            writeln!(out, "{}", outcome.good().price_note(options.currency))?;
        }
    }

    write!(out, "{}", render_summary(summary, options.currency))?;
    Ok(())
}
