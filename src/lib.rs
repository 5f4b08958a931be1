pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::file_source::FileCommandSource;
pub use core::{
    engine::ParkingEngine,
    garage::Garage,
    processor::CommandProcessor,
    report::{RunReport, RunStats},
};
pub use domain::model::{ArrivalOutcome, Car, Command, CommandKind, DepartureOutcome};
pub use domain::ports::{CommandSource, MalformedLinePolicy, SettingsProvider};
pub use utils::error::{ParkingError, Result};
