// Application configuration, loaded from the embedded defaults or a
// user-provided JSON file of the same shape.

pub mod theme;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub api: ApiSettings,
    pub search: SearchSettings,
    pub notifications: NotificationSettings,
    pub shortcuts: Shortcuts,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
    pub debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    pub dismiss_ms: u64,
    pub fade_ms: u64,
}

/// Key chords as written in the config file; parsed into `KeyCombo`s when
/// the shortcut registry is populated.
#[derive(Debug, Deserialize, Clone)]
pub struct Shortcuts {
    pub focus_search: String,
    pub close_overlay: String,
    pub export_csv: String,
}

impl AppConfig {
    /// Built-in defaults compiled into the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig =
            serde_json::from_str(config_str).context("embedded default configuration is invalid")?;
        Ok(config)
    }

    /// Loads a user-provided configuration file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration from {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("parsing configuration from {}", path.display()))?;
        Ok(config)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notifications.dismiss_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notifications.fade_ms)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.theme, "dark");
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.notification_dismiss(), Duration::from_millis(5000));
        assert_eq!(config.notification_fade(), Duration::from_millis(300));
        assert_eq!(config.shortcuts.focus_search, "Ctrl+K");
    }

    #[test]
    fn test_load_from_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{\"version\": 1}").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }
}
