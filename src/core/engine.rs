use crate::core::garage::Garage;
use crate::core::processor::CommandProcessor;
use crate::core::report::RunReport;
use crate::core::SettingsProvider;
use crate::utils::error::Result;
use std::io::Write;

/// One full run: read the input file, apply every command, optionally list
/// the garage, optionally persist a report.
pub struct ParkingEngine<S: SettingsProvider> {
    settings: S,
}

impl<S: SettingsProvider> ParkingEngine<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn run<W: Write>(&self, out: W) -> Result<RunReport> {
        let started_at = chrono::Utc::now();
        tracing::info!(
            "🚗 Starting parking run (capacity {}, input {})",
            self.settings.capacity(),
            self.settings.input_path()
        );

        let garage = Garage::with_capacity(self.settings.capacity());
        let mut processor = CommandProcessor::with_garage(garage, out)
            .with_policy(self.settings.malformed_policy());

        let commands = processor.input(self.settings.input_path());
        processor.process(&commands)?;

        if self.settings.list_after_run() {
            processor.output()?;
        } else {
            processor.writer_mut().flush()?;
        }

        let report = RunReport::new(started_at, processor.garage(), processor.stats());
        tracing::info!(
            "✅ Run finished: {} commands, {} cars moved out, {} still parked",
            report.stats.commands_processed,
            report.stats.cars_moved_out,
            report.occupants.len()
        );

        if let Some(path) = self.settings.report_path() {
            report.write_to(path)?;
        }

        Ok(report)
    }
}
