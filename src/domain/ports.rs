use crate::domain::model::Command;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// What to do with an input line that is not `<A|D> <plate>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    #[default]
    Skip,
    Reject,
}

pub trait CommandSource {
    fn read_commands(&self) -> Result<Vec<Command>>;
}

pub trait SettingsProvider {
    fn capacity(&self) -> usize;
    fn input_path(&self) -> &str;
    fn malformed_policy(&self) -> MalformedLinePolicy;
    fn list_after_run(&self) -> bool;
    fn report_path(&self) -> Option<&str>;
}
