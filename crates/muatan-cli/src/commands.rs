//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{write_report, ReportOptions};
use muatan_app::{run_session, Config};
use muatan_types::{OutputFormat, Result};
use std::io::{self, Write};

/// Per-run values from `muatan load` flags
#[derive(Debug, Default)]
struct LoadOverrides {
    capacity: Option<f64>,
    rate: Option<f64>,
    worker: Option<String>,
    carrier: Option<String>,
}

/// Persistent changes from `muatan config --set-*`
#[derive(Debug, Default)]
struct ConfigChanges {
    capacity: Option<f64>,
    rate: Option<f64>,
    worker: Option<String>,
    carrier: Option<String>,
    currency: Option<String>,
    output: Option<OutputFormat>,
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match cli.command {
        None => cmd_load(config, false),
        Some(Commands::Load {
            capacity,
            rate,
            worker,
            carrier,
            show_prices,
        }) => {
            let overrides = LoadOverrides {
                capacity,
                rate,
                worker,
                carrier,
            };
            cmd_load(apply_load_overrides(config, overrides), show_prices)
        }
        Some(Commands::Config {
            show,
            set_capacity,
            set_rate,
            set_worker,
            set_carrier,
            set_currency,
            set_output,
        }) => {
            let changes = ConfigChanges {
                capacity: set_capacity,
                rate: set_rate,
                worker: set_worker,
                carrier: set_carrier,
                currency: set_currency,
                output: set_output,
            };
            cmd_config(config, show, changes)
        }
    }
}

fn apply_load_overrides(mut config: Config, overrides: LoadOverrides) -> Config {
    if let Some(capacity) = overrides.capacity {
        config.capacity_kg = capacity;
    }
    if let Some(rate) = overrides.rate {
        config.rate_per_kg = rate;
    }
    if let Some(worker) = overrides.worker {
        config.worker_name = worker;
    }
    if let Some(carrier) = overrides.carrier {
        config.carrier_type = carrier;
    }
    config
}

/// Returns true if anything was changed
fn apply_config_changes(config: &mut Config, changes: ConfigChanges) -> bool {
    let mut changed = false;

    if let Some(capacity) = changes.capacity {
        config.capacity_kg = capacity;
        changed = true;
    }
    if let Some(rate) = changes.rate {
        config.rate_per_kg = rate;
        changed = true;
    }
    if let Some(worker) = changes.worker {
        config.worker_name = worker;
        changed = true;
    }
    if let Some(carrier) = changes.carrier {
        config.carrier_type = carrier;
        changed = true;
    }
    if let Some(currency) = changes.currency {
        config.currency = currency;
        changed = true;
    }
    if let Some(format) = changes.output {
        config.output_format = format;
        changed = true;
    }

    changed
}

fn cmd_load(config: Config, show_prices: bool) -> Result<()> {
    config.validate()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = run_session(&config, stdin.lock(), &mut out)?;

    let options = ReportOptions {
        format: config.output_format,
        currency: &config.currency,
        show_prices,
    };
    write_report(&mut out, &report, &options)?;
    out.flush()?;
    Ok(())
}

fn cmd_config(mut config: Config, show: bool, changes: ConfigChanges) -> Result<()> {
    let changed = apply_config_changes(&mut config, changes);

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_load_flags_override_one_run() {
        let base = Config::default();
        let config = apply_load_overrides(
            base.clone(),
            LoadOverrides {
                capacity: Some(750.0),
                rate: Some(12.5),
                worker: Some("Sari".to_string()),
                carrier: None,
            },
        );
        assert_eq!(config.capacity_kg, 750.0);
        assert_eq!(config.rate_per_kg, 12.5);
        assert_eq!(config.worker_name, "Sari");
        assert_eq!(config.carrier_type, base.carrier_type);
        assert_eq!(config.currency, base.currency);
        assert_eq!(base, Config::default());
    }

    #[test]
    fn test_no_load_flags_keeps_config() {
        let config = apply_load_overrides(Config::default(), LoadOverrides::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_flags_parsed_from_command_line() {
        let cli = Cli::parse_from([
            "muatan", "load", "--capacity", "300", "--carrier", "Pickup", "--show-prices",
        ]);
        match cli.command {
            Some(Commands::Load {
                capacity,
                carrier,
                rate,
                show_prices,
                ..
            }) => {
                assert_eq!(capacity, Some(300.0));
                assert_eq!(carrier.as_deref(), Some("Pickup"));
                assert_eq!(rate, None);
                assert!(show_prices);
            }
            _ => panic!("expected load command"),
        }
    }

    #[test]
    fn test_config_set_flags() {
        let mut config = Config::default();
        let changed = apply_config_changes(
            &mut config,
            ConfigChanges {
                capacity: Some(1000.0),
                currency: Some("IDR".to_string()),
                output: Some(OutputFormat::Json),
                ..ConfigChanges::default()
            },
        );
        assert!(changed);
        assert_eq!(config.capacity_kg, 1000.0);
        assert_eq!(config.currency, "IDR");
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.rate_per_kg, Config::default().rate_per_kg);
    }

    #[test]
    fn test_config_without_set_flags_is_unchanged() {
        let mut config = Config::default();
        assert!(!apply_config_changes(&mut config, ConfigChanges::default()));
        assert_eq!(config, Config::default());
    }
}
