//! Runtime settings for the native host
//!
//! Read from a JSON file. Gameplay constants live in `consts` and are not
//! configurable here.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "INVADERS_SETTINGS";

#[derive(Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings file is not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// Parsed but unusable
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "failed to parse settings: {e}"),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Frames per second
    pub tick_rate_hz: u32,
    /// Sleep between frames (off for fast headless runs)
    pub pace_frames: bool,
    /// Stop after this many frames in total
    pub max_frames: Option<u64>,
    /// Runs the headless host plays before quitting
    pub max_runs: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            pace_frames: true,
            max_frames: None,
            max_runs: 1,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by `INVADERS_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("{e} ({path}), using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid("tick_rate_hz must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_hz, 140);
        assert!(settings.pace_frames);
        assert_eq!(settings.max_runs, 1);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 42, "pace_frames": false }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.pace_frames);
        assert_eq!(settings.tick_rate_hz, 140);
        assert_eq!(settings.max_frames, None);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = Settings::from_json(r#"{ "tick_rate_hz": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_bad_json() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("invaders-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(7),
            max_frames: Some(1000),
            max_runs: 3,
            ..Settings::default()
        };
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load_from("/nonexistent/invaders.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
