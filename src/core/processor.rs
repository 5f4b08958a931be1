use crate::adapters::file_source::FileCommandSource;
use crate::core::garage::Garage;
use crate::core::report::RunStats;
use crate::domain::model::{ArrivalOutcome, Command, CommandKind, DepartureOutcome};
use crate::domain::ports::{CommandSource, MalformedLinePolicy};
use crate::utils::error::Result;
use std::io::Write;
use std::path::Path;

pub const ROOM_MESSAGE: &str = "There is room";
pub const FULL_MESSAGE: &str = "Garage full, this car cannot enter";
pub const NOT_FOUND_MESSAGE: &str = "This car not in the garage";
pub const EMPTY_MESSAGE: &str = "Garage is empty";
pub const LISTING_HEADER: &str = "Cars currently in garage:";
pub const NO_CARS_MESSAGE: &str = "None.";
pub const READ_ERROR_MESSAGE: &str = "Error reading file";

/// Drives a [`Garage`] from parking commands and writes the transcript to `W`.
pub struct CommandProcessor<W: Write> {
    garage: Garage,
    out: W,
    policy: MalformedLinePolicy,
    stats: RunStats,
}

impl<W: Write> CommandProcessor<W> {
    pub fn new(out: W) -> Self {
        Self::with_garage(Garage::new(), out)
    }

    pub fn with_garage(garage: Garage, out: W) -> Self {
        Self {
            garage,
            out,
            policy: MalformedLinePolicy::default(),
            stats: RunStats::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reads commands from a file. Any failure is reported on the output and
    /// yields no commands.
    pub fn input<P: AsRef<Path>>(&mut self, path: P) -> Vec<Command> {
        let source = FileCommandSource::new(path.as_ref()).with_policy(self.policy);
        self.input_from(&source)
    }

    pub fn input_from<S: CommandSource>(&mut self, source: &S) -> Vec<Command> {
        match source.read_commands() {
            Ok(commands) => {
                tracing::info!("📥 Loaded {} commands", commands.len());
                commands
            }
            Err(e) => {
                tracing::error!("❌ Failed to read commands: {}", e);
                if let Err(write_err) = writeln!(self.out, "{}", READ_ERROR_MESSAGE) {
                    tracing::error!("❌ Could not report read failure: {}", write_err);
                }
                Vec::new()
            }
        }
    }

    pub fn process(&mut self, commands: &[Command]) -> Result<()> {
        for command in commands {
            self.apply(command)?;
        }
        tracing::debug!("Processed {} commands", commands.len());
        Ok(())
    }

    fn apply(&mut self, command: &Command) -> Result<()> {
        let plate = command.plate.as_str();
        writeln!(self.out, "{} {}", command.kind, plate)?;
        self.stats.commands_processed += 1;

        match command.kind {
            CommandKind::Arrival => match self.garage.arrive(plate) {
                ArrivalOutcome::Admitted => {
                    self.stats.arrivals_admitted += 1;
                    writeln!(self.out, "{}", ROOM_MESSAGE)?;
                }
                ArrivalOutcome::Full => {
                    self.stats.arrivals_rejected += 1;
                    writeln!(self.out, "{}", FULL_MESSAGE)?;
                }
            },
            CommandKind::Departure => match self.garage.depart(plate) {
                DepartureOutcome::Departed { moved_out } => {
                    self.stats.departures += 1;
                    self.stats.cars_moved_out += moved_out;
                    writeln!(self.out, "{} cars moved out", moved_out)?;
                }
                DepartureOutcome::NotFound => {
                    self.stats.departures_not_found += 1;
                    writeln!(self.out, "{}", NOT_FOUND_MESSAGE)?;
                }
                DepartureOutcome::Empty => {
                    self.stats.departures_from_empty += 1;
                    writeln!(self.out, "{}", EMPTY_MESSAGE)?;
                }
            },
        }
        Ok(())
    }

    /// Prints the listing block, bottom of the stack first.
    pub fn output(&mut self) -> Result<()> {
        writeln!(self.out, "{}", LISTING_HEADER)?;
        match self.garage.list() {
            Some(plates) => {
                for plate in plates {
                    writeln!(self.out, "{}", plate)?;
                }
            }
            None => writeln!(self.out, "{}", NO_CARS_MESSAGE)?,
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn garage(&self) -> &Garage {
        &self.garage
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}
