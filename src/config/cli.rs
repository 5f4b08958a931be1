
use crate::core::garage::Garage;
use crate::core::{MalformedLinePolicy, SettingsProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "car-parking")]
#[command(about = "Simulate a single-lane parking garage from a command file")]
pub struct CliConfig {
    #[arg(long, default_value = "parking.txt")]
    pub input_path: String,

    #[arg(long, default_value = "10")]
    pub capacity: usize,

    /// How to treat lines that are not `<A|D> <plate>`
    #[arg(long, value_enum, default_value_t = MalformedLinePolicy::Skip)]
    pub on_malformed: MalformedLinePolicy,

    #[arg(long, help = "Do not list the garage contents after the run")]
    pub no_listing: bool,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    /// TOML configuration file; replaces the run flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Run flags that `--config` replaces, by name, when set away from their defaults.
    pub fn shadowed_run_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.config.is_none() {
            return flags;
        }
        if self.input_path != "parking.txt" {
            flags.push("--input-path");
        }
        if self.capacity != Garage::DEFAULT_CAPACITY {
            flags.push("--capacity");
        }
        if self.on_malformed != MalformedLinePolicy::Skip {
            flags.push("--on-malformed");
        }
        if self.no_listing {
            flags.push("--no-listing");
        }
        if self.report.is_some() {
            flags.push("--report");
        }
        flags
    }
}

impl SettingsProvider for CliConfig {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn malformed_policy(&self) -> MalformedLinePolicy {
        self.on_malformed
    }

    fn list_after_run(&self) -> bool {
        !self.no_listing
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("capacity", self.capacity, 1, Garage::MAX_CAPACITY)?;
        validate_path("input_path", &self.input_path)?;
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
