use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::OutputFormat;
use crate::logging::LogConfig;
use crate::models::SensorPackage;
use crate::packages::sample_packages;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Report output settings
    #[serde(default)]
    pub output: OutputSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,

    /// Sensor packages processed by `fitreport report`
    #[serde(default = "sample_packages")]
    pub packages: Vec<SensorPackage>,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format (text, json, table)
    pub format: OutputFormat,

    /// Colorize headers and errors
    pub color: bool,

    /// Log and skip packages that fail instead of aborting
    pub skip_invalid: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            skip_invalid: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputSettings::default(),
            logging: LogConfig::default(),
            packages: sample_packages(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = self.to_toml()?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize configuration to TOML")
    }

    /// Default configuration file location
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fitreport")
            .join("config.toml")
    }

    /// Load the default configuration file, or built-in defaults when it does not exist
    pub fn load_or_default() -> Result<Self> {
        Self::load_if_present(Self::default_config_path())
    }

    /// Load `path` if it exists; a file that exists but cannot be parsed is an error
    pub fn load_if_present<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Configuration used while `config --init` writes `path`.
    ///
    /// The file is not read when it is about to be replaced, so a broken
    /// config can always be overwritten with `--force`.
    pub fn load_for_init<P: AsRef<Path>>(path: P, force: bool) -> Result<Self> {
        if force || !path.as_ref().exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: AppConfig = toml::from_str("[output]\nformat = \"table\"\n").unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Table);
        assert!(parsed.output.color);
        assert_eq!(parsed.packages, sample_packages());
        assert_eq!(parsed.logging, LogConfig::default());
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.output.skip_invalid = true;
        config.packages.truncate(1);
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_if_present() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        assert_eq!(AppConfig::load_if_present(&path).unwrap(), AppConfig::default());

        fs::write(&path, "packages = \"oops").unwrap();
        assert!(AppConfig::load_if_present(&path).is_err());
    }

    #[test]
    fn test_load_for_init_ignores_file_being_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "packages = \"oops").unwrap();

        assert_eq!(AppConfig::load_for_init(&path, true).unwrap(), AppConfig::default());
        assert!(AppConfig::load_for_init(&path, false).is_err());
        assert_eq!(
            AppConfig::load_for_init(temp_dir.path().join("new.toml"), false).unwrap(),
            AppConfig::default()
        );
    }
}
