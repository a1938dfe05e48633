//! Configuration management
//!
//! Loads and saves the bootstrap settings: which surface to bind, the
//! diagnostic line, which local camera backs the capture capability, and the
//! default log filter.

use crate::bootstrap::DEFAULT_SURFACE_ID;
use crate::diagnostics::WEBCAM_ACCESS_FAILED;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Id of the video surface the stream is bound to
    pub surface_id: String,
    /// Line written to the console when webcam access fails
    pub diagnostic_message: String,
    pub camera: CameraConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Index of the local camera opened by the native backend
    pub device_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            surface_id: DEFAULT_SURFACE_ID.to_string(),
            diagnostic_message: WEBCAM_ACCESS_FAILED.to_string(),
            camera: CameraConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { device_index: 0 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "webcam_bootstrap=info,console=warn".to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: BootstrapConfig = toml::from_str(&contents)?;
        config.validate()?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConfigError::Write)?;
            }
        }

        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string).map_err(ConfigError::Write)?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from("webcam-bootstrap.toml")
    }

    /// Load from default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_id.trim().is_empty() {
            return Err(ConfigError::Invalid("surface_id must not be empty".to_string()));
        }
        if self.surface_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "surface_id must not contain whitespace".to_string(),
            ));
        }
        if self.diagnostic_message.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "diagnostic_message must not be empty".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BootstrapConfig::default();
        assert_eq!(config.surface_id, "video");
        assert_eq!(config.diagnostic_message, WEBCAM_ACCESS_FAILED);
        assert_eq!(config.camera.device_index, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = BootstrapConfig::default();
        config.surface_id = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = BootstrapConfig::default();
        config.surface_id = "my video".to_string();
        assert!(config.validate().is_err());

        let mut config = BootstrapConfig::default();
        config.diagnostic_message.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("webcam-bootstrap.toml");

        let mut config = BootstrapConfig::default();
        config.camera.device_index = 2;
        config.save_to_file(&path).unwrap();

        let loaded = BootstrapConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let loaded = BootstrapConfig::load_from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, BootstrapConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "surface_id = \"preview\"\n").unwrap();

        let loaded = BootstrapConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.surface_id, "preview");
        assert_eq!(loaded.diagnostic_message, WEBCAM_ACCESS_FAILED);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "surface_id = [").unwrap();

        let result = BootstrapConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
