use crate::domain::model::Command;
use crate::domain::ports::{CommandSource, MalformedLinePolicy};
use crate::utils::error::{ParkingError, Result};
use std::path::PathBuf;

/// Reads `<A|D> <plate>` lines from a text file in one go.
#[derive(Debug, Clone)]
pub struct FileCommandSource {
    path: PathBuf,
    policy: MalformedLinePolicy,
}

impl FileCommandSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: MalformedLinePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MalformedLinePolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl CommandSource for FileCommandSource {
    fn read_commands(&self) -> Result<Vec<Command>> {
        tracing::debug!("Reading commands from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        parse_commands(&content, self.policy)
    }
}

/// Parses a whole input text. Blank lines are ignored; malformed lines follow `policy`.
pub fn parse_commands(content: &str, policy: MalformedLinePolicy) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        match parse_line(raw, line_no) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(e) => match policy {
                MalformedLinePolicy::Skip => {
                    tracing::warn!("⚠️ Skipping line {}: {}", line_no, e);
                }
                MalformedLinePolicy::Reject => return Err(e),
            },
        }
    }

    Ok(commands)
}

/// `Ok(None)` for a blank line.
pub fn parse_line(raw: &str, line_no: usize) -> Result<Option<Command>> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let malformed = |reason: String| ParkingError::ParseError {
        line: line_no,
        content: raw.trim().to_string(),
        reason,
    };

    match tokens.as_slice() {
        [] => Ok(None),
        [letter, plate] => Command::from_tokens(letter, plate)
            .map(Some)
            .map_err(|e| malformed(e.to_string())),
        other => Err(malformed(format!(
            "expected 2 tokens, found {}",
            other.len()
        ))),
    }
}
