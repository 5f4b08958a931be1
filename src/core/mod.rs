pub mod engine;
pub mod garage;
pub mod processor;
pub mod report;

pub use crate::domain::model::{ArrivalOutcome, Car, Command, CommandKind, DepartureOutcome};
pub use crate::domain::ports::{CommandSource, MalformedLinePolicy, SettingsProvider};
pub use crate::utils::error::Result;
