use crate::error::{JotzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

fn default_color() -> bool {
    true
}

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotzConfig {
    /// Whether CLI output uses colors.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for JotzConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl JotzConfig {
    /// Load configuration from the given directory, falling back to defaults
    /// when no config file exists yet.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(JotzError::Io)?;
        let config = serde_json::from_str(&content).map_err(JotzError::Serialization)?;
        Ok(config)
    }

    /// Save configuration to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotzError::Io)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(JotzError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(JotzError::Io)?;
        Ok(())
    }

    /// Get a config value as a display string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key. Returns a user-facing message on failure.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "color" => {
                self.color = match value.to_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => return Err(format!("invalid value for color: {} (use on/off)", value)),
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn default_config_has_color_on() {
        let config = JotzConfig::default();
        assert!(config.color);
    }

    #[test]
    fn set_color_accepts_on_off() {
        let mut config = JotzConfig::default();
        config.set("color", "off").unwrap();
        assert!(!config.color);
        config.set("color", "on").unwrap();
        assert!(config.color);
    }

    #[test]
    fn set_color_rejects_garbage() {
        let mut config = JotzConfig::default();
        let err = config.set("color", "maybe").unwrap_err();
        assert!(err.contains("invalid value for color"));
        assert!(config.color);
    }

    #[test]
    fn set_unknown_key_fails() {
        let mut config = JotzConfig::default();
        let err = config.set("verbosity", "high").unwrap_err();
        assert!(err.contains("Unknown config key"));
    }

    #[test]
    fn get_returns_display_string() {
        let config = JotzConfig::default();
        assert_eq!(config.get("color"), Some("true".to_string()));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn load_missing_file_returns_default() {
        let temp_dir = env::temp_dir().join("jotz_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = JotzConfig::load(&temp_dir).unwrap();
        assert_eq!(config, JotzConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = env::temp_dir().join("jotz_test_config_roundtrip");
        let _ = fs::remove_dir_all(&temp_dir);

        let mut config = JotzConfig::default();
        config.set("color", "off").unwrap();
        config.save(&temp_dir).unwrap();

        let loaded = JotzConfig::load(&temp_dir).unwrap();
        assert_eq!(loaded, config);

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }
}
