use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

const APP_SENTINEL: &str = "apod-gallery";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "_app")]
    pub app: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// api.nasa.gov key; the shared demo key is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: APP_SENTINEL.to_string(),
            theme: None,
            api_key: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize settings")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.app != APP_SENTINEL {
            bail!(
                "Settings file appears to belong to another application (expected _app = '{}', found '{}')",
                APP_SENTINEL,
                self.app
            );
        }
        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            bail!("Settings file has an empty api_key");
        }
        Ok(())
    }
}

pub fn config_dir(custom: Option<&PathBuf>) -> Option<PathBuf> {
    custom
        .cloned()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config").join("apod")))
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.toml")
}

pub fn themes_dir(config_dir: &Path) -> PathBuf {
    config_dir.join("themes")
}

pub fn log_path(config_dir: &Path) -> PathBuf {
    config_dir.join("apod.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.app, "apod-gallery");
        assert!(settings.theme.is_none());
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn load_valid_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        fs::write(
            &path,
            "_app = \"apod-gallery\"\ntheme = \"nord\"\napi_key = \"abc123\"\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();

        assert_eq!(settings.theme.as_deref(), Some("nord"));
        assert_eq!(settings.api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn wrong_sentinel_returns_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        fs::write(&path, "_app = \"other-app\"\n").unwrap();

        let err = Settings::load(&path).unwrap_err().to_string();
        assert!(err.contains("another application"));
    }

    #[test]
    fn blank_api_key_returns_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        fs::write(&path, "_app = \"apod-gallery\"\napi_key = \"  \"\n").unwrap();

        let err = Settings::load(&path).unwrap_err().to_string();
        assert!(err.contains("empty api_key"));
    }

    #[test]
    fn saved_file_layout() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");

        let settings = Settings {
            theme: Some("dracula".to_string()),
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        settings.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        insta::assert_snapshot!("saved_settings_file", content);
    }

    #[test]
    fn round_trip_serialization() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");

        let original = Settings {
            theme: Some("nord".to_string()),
            ..Default::default()
        };

        original.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();

        assert_eq!(loaded.app, original.app);
        assert_eq!(loaded.theme, original.theme);
        assert_eq!(loaded.api_key, None);
    }

    #[test]
    fn config_dir_uses_custom_when_provided() {
        let custom = PathBuf::from("/custom/path");
        assert_eq!(
            config_dir(Some(&custom)),
            Some(PathBuf::from("/custom/path"))
        );
    }

    #[test]
    fn config_dir_falls_back_to_default() {
        let result = config_dir(None);
        assert!(result.is_some());
        assert!(result.unwrap().ends_with("apod"));
    }

    #[test]
    fn log_path_lives_in_config_dir() {
        let dir = PathBuf::from("/tmp/apod");
        assert_eq!(log_path(&dir), PathBuf::from("/tmp/apod/apod.log"));
    }
}
