use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Line {line} is malformed ({reason}): '{content}'")]
    ParseError {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Unknown command letter '{letter}', expected A or D")]
    InvalidCommand { letter: String },

    #[error("License plate cannot be empty")]
    EmptyPlate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ParkingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParkingError::IoError(_) => ErrorCategory::Io,
            ParkingError::SerializationError(_) => ErrorCategory::Output,
            ParkingError::ConfigError { .. }
            | ParkingError::ConfigValidationError { .. }
            | ParkingError::InvalidConfigValueError { .. }
            | ParkingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ParkingError::ParseError { .. }
            | ParkingError::InvalidCommand { .. }
            | ParkingError::EmptyPlate => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入錯誤只會讓該次執行沒有指令可處理
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ParkingError::IoError(e) => format!("Could not read or write a file: {}", e),
            ParkingError::SerializationError(e) => {
                format!("Could not produce the run report: {}", e)
            }
            ParkingError::ConfigError { message } => format!("Configuration problem: {}", message),
            ParkingError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is not valid: {}", field, message)
            }
            ParkingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is not valid: {}", field, reason)
            }
            ParkingError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            ParkingError::ParseError { line, reason, .. } => {
                format!("Input line {} could not be understood: {}", line, reason)
            }
            ParkingError::InvalidCommand { letter } => {
                format!("'{}' is not a parking command", letter)
            }
            ParkingError::EmptyPlate => "A car needs a license plate".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is readable/writable",
            ErrorCategory::Output => "Check the report path and available disk space",
            ErrorCategory::Configuration => {
                "Review the command-line flags or the TOML configuration file"
            }
            ErrorCategory::Input => {
                "Each line must look like 'A <plate>' or 'D <plate>'; use --on-malformed skip to ignore bad lines"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_low_severity() {
        let err = ParkingError::InvalidCommand {
            letter: "X".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert!(err.user_friendly_message().contains("'X'"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = ParkingError::MissingConfigError {
            field: "input.path".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ParkingError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().starts_with("IO error"));
    }
}
