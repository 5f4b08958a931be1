use crate::core::garage::Garage;
use crate::core::{MalformedLinePolicy, SettingsProvider};
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{
    validate_path, validate_range, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub garage: Option<GarageConfig>,
    pub input: InputConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageConfig {
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub on_malformed: Option<MalformedLinePolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub list_after_run: Option<bool>,
    pub report_path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ParkingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PARKING_INPUT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ParkingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_range("garage.capacity", self.capacity(), 1, Garage::MAX_CAPACITY)?;

        let input_path = validate_required_field("input.path", &self.input.path)?;
        validate_path("input.path", input_path)?;

        if let Some(report) = self.report_path() {
            validate_path("output.report_path", report)?;
        }

        Ok(())
    }
}

impl SettingsProvider for TomlConfig {
    fn capacity(&self) -> usize {
        self.garage
            .as_ref()
            .and_then(|g| g.capacity)
            .unwrap_or(Garage::DEFAULT_CAPACITY)
    }

    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn malformed_policy(&self) -> MalformedLinePolicy {
        self.input.on_malformed.unwrap_or_default()
    }

    fn list_after_run(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.list_after_run)
            .unwrap_or(true)
    }

    fn report_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.report_path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[garage]
capacity = 4

[input]
path = "cars.txt"
on_malformed = "reject"

[output]
list_after_run = false
report_path = "reports/run.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.capacity(), 4);
        assert_eq!(config.input_path(), "cars.txt");
        assert_eq!(config.malformed_policy(), MalformedLinePolicy::Reject);
        assert!(!config.list_after_run());
        assert_eq!(config.report_path(), Some("reports/run.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[input]\npath = \"cars.txt\"\n").unwrap();

        assert_eq!(config.capacity(), 10);
        assert_eq!(config.malformed_policy(), MalformedLinePolicy::Skip);
        assert!(config.list_after_run());
        assert!(config.report_path().is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CAR_PARKING_TEST_INPUT", "/tmp/from-env.txt");

        let toml_content = r#"
[input]
path = "${CAR_PARKING_TEST_INPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/tmp/from-env.txt");

        std::env::remove_var("CAR_PARKING_TEST_INPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[input]
path = "${CAR_PARKING_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "${CAR_PARKING_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let missing_path = TomlConfig::from_toml_str("[input]\n").unwrap();
        assert!(matches!(
            missing_path.validate(),
            Err(ParkingError::MissingConfigError { .. })
        ));

        let zero_capacity =
            TomlConfig::from_toml_str("[garage]\ncapacity = 0\n[input]\npath = \"x.txt\"\n")
                .unwrap();
        assert!(zero_capacity.validate().is_err());

        let huge_capacity = TomlConfig::from_toml_str(
            "[garage]\ncapacity = 10000000000\n[input]\npath = \"x.txt\"\n",
        )
        .unwrap();
        assert!(matches!(
            huge_capacity.validate(),
            Err(ParkingError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[input\npath = ");
        assert!(matches!(
            result,
            Err(ParkingError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[garage]
capacity = 2

[input]
path = "file-test.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.capacity(), 2);
        assert_eq!(config.input_path(), "file-test.txt");
    }
}
