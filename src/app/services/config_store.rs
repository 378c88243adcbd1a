//! Theme configuration persistence.

use serde_json::{Map, Value};

use crate::app::domain::theme::ThemeConfig;
use crate::app::infrastructure::storage::StorageAdapter;

pub const THEME_STORAGE_KEY: &str = "imprenta-theme-config";

pub struct ConfigStore<S: StorageAdapter> {
    storage: S,
    key: String,
}

impl<S: StorageAdapter> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: THEME_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn defaults(&self) -> ThemeConfig {
        ThemeConfig::default()
    }

    /// Save the configuration. Returns `false` if serialization or the write failed.
    pub fn save(&mut self, config: &ThemeConfig) -> bool {
        match serde_json::to_string(config) {
            Ok(json) => {
                let written = self.storage.set(&self.key, &json);
                if written {
                    tracing::debug!("Theme config saved under {}", self.key);
                }
                written
            }
            Err(e) => {
                tracing::error!("Error saving theme config: {}", e);
                false
            }
        }
    }

    /// Stored configuration merged over the defaults, `None` when nothing is stored.
    ///
    /// The merge is shallow: a top-level key present in storage replaces the
    /// default value for that key entirely.
    pub fn load(&self) -> Option<ThemeConfig> {
        let stored = self.load_stored()?;
        Some(merge_over_defaults(stored))
    }

    /// Remove the stored configuration and return the defaults.
    pub fn reset(&mut self) -> ThemeConfig {
        self.storage.remove(&self.key);
        self.defaults()
    }

    fn load_stored(&self) -> Option<Map<String, Value>> {
        let raw = self.storage.get(&self.key)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Some(map),
            Ok(other) => {
                tracing::error!("Error loading theme config: expected an object, got {}", other);
                None
            }
            Err(e) => {
                tracing::error!("Error loading theme config: {}", e);
                None
            }
        }
    }
}

fn merge_over_defaults(stored: Map<String, Value>) -> ThemeConfig {
    let defaults = ThemeConfig::default();
    let mut merged = match serde_json::to_value(&defaults) {
        Ok(Value::Object(map)) => map,
        _ => return defaults,
    };
    for (key, value) in stored {
        merged.insert(key, value);
    }
    match serde_json::from_value(Value::Object(merged)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Stored theme config is malformed, using defaults: {}", e);
            defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::theme::HeroType;
    use crate::app::infrastructure::storage::MemoryStorage;

    #[test]
    fn test_load_without_stored_config() {
        let store = ConfigStore::new(MemoryStorage::new());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let mut config = ThemeConfig::default();
        config.hero.kind = HeroType::Solid;
        config.colors.insert("primary".to_string(), "#111111".to_string());
        assert!(store.save(&config));
        assert_eq!(store.load(), Some(config));
    }

    #[test]
    fn test_shallow_merge_replaces_whole_top_level_keys() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_STORAGE_KEY, r##"{"colors": {"primary": "#000000"}}"##);
        let store = ConfigStore::new(storage);
        let config = store.load().unwrap();

        // colors came from storage, so unspecified colors are gone
        assert_eq!(config.color("primary"), "#000000");
        assert_eq!(config.color("secondary"), "");
        // hero and sections were not stored, so defaults remain
        assert_eq!(config.hero, ThemeConfig::default().hero);
        assert_eq!(config.sections.len(), 5);
    }

    #[test]
    fn test_corrupt_storage_reads_as_absent() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_STORAGE_KEY, "{broken");
        let store = ConfigStore::new(storage.clone());
        assert_eq!(store.load(), None);

        storage.set(THEME_STORAGE_KEY, "[1, 2]");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_reset_removes_stored_config() {
        let storage = MemoryStorage::new();
        let mut store = ConfigStore::new(storage.clone());
        store.save(&ThemeConfig::default());
        assert!(!storage.is_empty());
        let defaults = store.reset();
        assert_eq!(defaults, ThemeConfig::default());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let mut store = ConfigStore::new(storage.clone()).with_key("other");
        store.save(&ThemeConfig::default());
        assert!(storage.get("other").is_some());
        assert!(storage.get(THEME_STORAGE_KEY).is_none());
    }
}
