use crate::utils::error::{ParkingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parked car, identified only by its license plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    plate: String,
}

impl Car {
    pub fn new(plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
        }
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    Arrival,
    Departure,
}

impl FromStr for CommandKind {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(CommandKind::Arrival),
            "D" => Ok(CommandKind::Departure),
            _ => Err(ParkingError::InvalidCommand {
                letter: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Arrival => f.write_str("Arrival"),
            CommandKind::Departure => f.write_str("Departure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    pub plate: String,
}

impl Command {
    pub fn new(kind: CommandKind, plate: impl Into<String>) -> Result<Self> {
        let plate = plate.into();
        if plate.is_empty() {
            return Err(ParkingError::EmptyPlate);
        }
        Ok(Self { kind, plate })
    }

    pub fn arrival(plate: impl Into<String>) -> Result<Self> {
        Self::new(CommandKind::Arrival, plate)
    }

    pub fn departure(plate: impl Into<String>) -> Result<Self> {
        Self::new(CommandKind::Departure, plate)
    }

    /// Builds a command from a raw `(letter, plate)` row.
    pub fn from_tokens(letter: &str, plate: &str) -> Result<Self> {
        let kind = letter.trim().parse::<CommandKind>()?;
        Self::new(kind, plate.trim())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalOutcome {
    Admitted,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureOutcome {
    /// The car left; `moved_out` cars above it were taken out and put back.
    Departed { moved_out: usize },
    NotFound,
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_creation() {
        let car = Car::new("ABC123");
        assert_eq!(car.plate(), "ABC123");
        assert_eq!(car.to_string(), "ABC123");
    }

    #[test]
    fn test_command_kind_is_case_insensitive() {
        assert_eq!("A".parse::<CommandKind>().unwrap(), CommandKind::Arrival);
        assert_eq!("a".parse::<CommandKind>().unwrap(), CommandKind::Arrival);
        assert_eq!("D".parse::<CommandKind>().unwrap(), CommandKind::Departure);
        assert_eq!("d".parse::<CommandKind>().unwrap(), CommandKind::Departure);
    }

    #[test]
    fn test_command_kind_rejects_unknown_letters() {
        for letter in ["X", "", "AD", "arrive"] {
            assert!(matches!(
                letter.parse::<CommandKind>(),
                Err(ParkingError::InvalidCommand { .. })
            ));
        }
    }

    #[test]
    fn test_command_from_tokens() {
        let cmd = Command::from_tokens("d", "XYZ999").unwrap();
        assert_eq!(cmd.kind, CommandKind::Departure);
        assert_eq!(cmd.plate, "XYZ999");
    }

    #[test]
    fn test_command_requires_plate() {
        assert!(matches!(
            Command::arrival(""),
            Err(ParkingError::EmptyPlate)
        ));
        assert!(matches!(
            Command::from_tokens("A", "  "),
            Err(ParkingError::EmptyPlate)
        ));
    }

    #[test]
    fn test_plates_are_case_sensitive() {
        assert_ne!(Car::new("abc123"), Car::new("ABC123"));
    }
}
