use crate::application::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// UI settings persisted across sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    pub theme: Theme,
}

pub struct ConfigRepository;

impl ConfigRepository {
    /// Where the config lives: `~/.tcalc.json`, or the working directory
    /// when no home directory is available.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".tcalc.json"),
            None => PathBuf::from(".tcalc.json"),
        }
    }

    pub fn save_config(config: &UiConfig, path: &Path) -> Result<(), String> {
        match serde_json::to_string_pretty(config) {
            Ok(json) => match fs::write(path, &json) {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            },
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_config(path: &Path) -> Result<UiConfig, String> {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<UiConfig>(&content) {
                Ok(config) => Ok(config),
                Err(e) => Err(format!("Invalid config format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = UiConfig { theme: Theme::Gamer };
        ConfigRepository::save_config(&config, &path).unwrap();

        let loaded = ConfigRepository::load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(ConfigRepository::load_config(&path).is_err());
    }

    #[test]
    fn test_load_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let result = ConfigRepository::load_config(&path);
        assert!(result.unwrap_err().contains("Invalid config format"));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        let json = serde_json::to_string(&UiConfig { theme: Theme::Light }).unwrap();
        assert!(json.contains("\"light\""));
    }
}
