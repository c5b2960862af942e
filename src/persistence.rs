use crate::constants::{MAX_HIDE_DELAY_MS, MAX_SCROLL_GUTTER_ROWS, MIN_HIDE_DELAY_MS};
use crate::types::Config;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("", "", "shoal").context("Failed to determine config directory")?;

        let config_dir = project_dirs.config_dir().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(ConfigStore { config_dir })
    }

    /// Store rooted at an explicit directory (used by tests)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        ConfigStore { config_dir }
    }

    pub fn load_config(&self) -> Result<Config> {
        let config_path = self.config_dir.join("config.json");

        if !config_path.exists() {
            // Create default config
            let config = Config::default();
            self.save_config(&config)?;
            return Ok(config);
        }

        let content = fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse config file: {}. Using defaults.", e);
            Config::default()
        });

        // Validate and clamp timing values
        let mut validated_config = config;
        validated_config.hide_delay_ms = validated_config
            .hide_delay_ms
            .clamp(MIN_HIDE_DELAY_MS, MAX_HIDE_DELAY_MS);
        validated_config.scroll_gutter = validated_config
            .scroll_gutter
            .min(MAX_SCROLL_GUTTER_ROWS);

        Ok(validated_config)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        let config_path = self.config_dir.join("config.json");
        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavbarPolicy;

    #[test]
    fn test_missing_config_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());

        let config = store.load_config().unwrap();
        assert_eq!(config.navbar_policy, NavbarPolicy::AutoHide);
        assert!(dir.path().join("config.json").exists());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());

        let config = Config {
            navbar_policy: NavbarPolicy::AlwaysVisible,
            hide_delay_ms: 5000,
            ..Config::default()
        };
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.navbar_policy, NavbarPolicy::AlwaysVisible);
        assert_eq!(loaded.hide_delay_ms, 5000);
    }

    #[test]
    fn test_out_of_range_delay_is_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());

        let config = Config {
            hide_delay_ms: 1,
            ..Config::default()
        };
        store.save_config(&config).unwrap();

        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.hide_delay_ms, MIN_HIDE_DELAY_MS);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_dir(dir.path().to_path_buf());

        fs::write(dir.path().join("config.json"), "not json").unwrap();
        let loaded = store.load_config().unwrap();
        assert_eq!(loaded.hide_delay_ms, Config::default().hide_delay_ms);
    }
}
