use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::app::infrastructure::error::AppError;

/// Where the bootstrap content comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BootstrapSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl Default for BootstrapSource {
    fn default() -> Self {
        BootstrapSource::File(PathBuf::from("config.json"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Directory of the file-backed storage; `None` uses the platform data dir
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Prefix applied to every storage key
    #[serde(default)]
    pub storage_prefix: String,

    #[serde(default)]
    pub bootstrap: BootstrapSource,

    /// Country code prepended to short local numbers in WhatsApp links
    #[serde(default = "default_country_code")]
    pub whatsapp_country_code: String,

    #[serde(default = "default_notification_hide_ms")]
    pub notification_hide_ms: u64,

    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

fn default_country_code() -> String {
    "54".to_string()
}

fn default_notification_hide_ms() -> u64 {
    3000
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage_dir: None,
            storage_prefix: String::new(),
            bootstrap: BootstrapSource::default(),
            whatsapp_country_code: default_country_code(),
            notification_hide_ms: default_notification_hide_ms(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or defaults if missing or malformed
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("vitrina");
        path.push("settings.json");
        path
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.whatsapp_country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Settings(format!(
                "invalid country code: {}",
                self.whatsapp_country_code
            )));
        }
        if self.http_timeout_secs == 0 {
            return Err(AppError::Settings("http timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Settings safe to run with: fields that fail [`AppSettings::validate`]
    /// go back to their defaults. Storage location and bootstrap are kept.
    pub fn validated(mut self) -> Self {
        if let Err(e) = self.validate() {
            tracing::warn!("{}. Using default values.", e);
            if !self.whatsapp_country_code.chars().all(|c| c.is_ascii_digit()) {
                self.whatsapp_country_code = default_country_code();
            }
            if self.http_timeout_secs == 0 {
                self.http_timeout_secs = default_http_timeout_secs();
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.whatsapp_country_code, "54");
        assert_eq!(settings.notification_hide_ms, 3000);
        assert_eq!(settings.bootstrap, BootstrapSource::File(PathBuf::from("config.json")));
        assert!(settings.storage_dir.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validated_restores_invalid_fields() {
        let settings = AppSettings {
            storage_prefix: "demo-".to_string(),
            whatsapp_country_code: "+54".to_string(),
            http_timeout_secs: 0,
            ..Default::default()
        }
        .validated();
        assert_eq!(settings.whatsapp_country_code, "54");
        assert_eq!(settings.http_timeout_secs, 10);
        assert_eq!(settings.storage_prefix, "demo-");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"storage_prefix": "demo-"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.storage_prefix, "demo-");
        assert_eq!(settings.http_timeout_secs, 10);
    }

    #[test]
    fn test_bootstrap_url_serialization() {
        let settings = AppSettings {
            bootstrap: BootstrapSource::Url("https://example.com/config.json".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Url\""));
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vitrina").join("settings.json");
        let settings = AppSettings {
            whatsapp_country_code: "598".to_string(),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_validate_rejects_bad_country_code() {
        let settings = AppSettings {
            whatsapp_country_code: "+54".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Settings(_))));
    }
}
