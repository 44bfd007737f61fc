//! User settings for the goal planner
//!
//! Display preferences only: the currency label shown next to amounts, how
//! many start years the planner offers, and which savings mode the goal form
//! opens with.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::SavingsMode;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Label printed after amounts, e.g. "BDT"
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Number of selectable start years, counting from the current year
    #[serde(default = "default_year_window")]
    pub start_year_window: u32,

    /// Savings mode the goal form starts in
    #[serde(default)]
    pub default_savings_mode: SavingsMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "BDT".to_string()
}

fn default_year_window() -> u32 {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            start_year_window: default_year_window(),
            default_savings_mode: SavingsMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.start_year_window == 0 {
            return Err(PlannerError::Config(
                "start_year_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_label, "BDT");
        assert_eq!(settings.start_year_window, 20);
        assert_eq!(settings.default_savings_mode, SavingsMode::Monthly);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_label: "EUR".into(),
            start_year_window: 5,
            default_savings_mode: SavingsMode::Time,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_label":"USD"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_label, "USD");
        assert_eq!(loaded.start_year_window, 20);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(PlannerError::Config(_))
        ));

        std::fs::write(paths.settings_file(), r#"{"start_year_window":0}"#).unwrap();
        assert!(Settings::load_or_create(&paths).is_err());
    }
}
