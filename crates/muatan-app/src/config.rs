//! Configuration management for muatan
//!
//! Config stored at: ~/.config/muatan/config.json

use muatan_domain::validate::{ensure_name, ensure_non_negative, ensure_positive};
use muatan_domain::{Carrier, Worker};
use muatan_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Carrier type shown in reports
    #[serde(default = "default_carrier_type")]
    pub carrier_type: String,

    /// Maximum load in kg
    #[serde(default = "default_capacity_kg")]
    pub capacity_kg: f64,

    /// Name of the worker doing the loading
    #[serde(default = "default_worker_name")]
    pub worker_name: String,

    /// Loading fee per kg
    #[serde(default = "default_rate_per_kg")]
    pub rate_per_kg: f64,

    /// Currency label for money figures
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_carrier_type() -> String {
    "Expedition Truck".to_string()
}

fn default_capacity_kg() -> f64 {
    500.0
}

fn default_worker_name() -> String {
    "Budi".to_string()
}

fn default_rate_per_kg() -> f64 {
    5000.0
}

fn default_currency() -> String {
    "Rp".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            carrier_type: default_carrier_type(),
            capacity_kg: default_capacity_kg(),
            worker_name: default_worker_name(),
            rate_per_kg: default_rate_per_kg(),
            currency: default_currency(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("muatan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Apply the same numeric rules as console input
    pub fn validate(&self) -> Result<()> {
        ensure_name("carrier type", &self.carrier_type)?;
        ensure_positive("capacity", self.capacity_kg)?;
        ensure_name("worker name", &self.worker_name)?;
        ensure_non_negative("rate per kg", self.rate_per_kg)?;
        Ok(())
    }

    pub fn worker(&self) -> Result<Worker> {
        Ok(Worker::new(self.worker_name.clone(), self.rate_per_kg)?)
    }

    pub fn carrier(&self) -> Result<Carrier> {
        Ok(Carrier::new(self.carrier_type.clone(), self.capacity_kg)?)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Muatan Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Carrier:        {}", self.carrier_type)?;
        writeln!(f, "Capacity:       {} kg", self.capacity_kg)?;
        writeln!(f, "Worker:         {}", self.worker_name)?;
        writeln!(f, "Rate per kg:    {} {}", self.currency, self.rate_per_kg)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
