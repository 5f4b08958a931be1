use crate::core::garage::Garage;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub commands_processed: usize,
    pub arrivals_admitted: usize,
    pub arrivals_rejected: usize,
    pub departures: usize,
    pub cars_moved_out: usize,
    pub departures_not_found: usize,
    pub departures_from_empty: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub capacity: usize,
    pub stats: RunStats,
    /// Bottom-to-top.
    pub occupants: Vec<String>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>, garage: &Garage, stats: &RunStats) -> Self {
        Self {
            run_id: format!("run_{}", started_at.format("%Y%m%d_%H%M%S")),
            started_at,
            capacity: garage.capacity(),
            stats: stats.clone(),
            occupants: garage.cars().iter().map(|car| car.plate().to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json()?)?;
        tracing::info!("📝 Run report written to {}", path.display());
        Ok(())
    }
}
