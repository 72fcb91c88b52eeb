//! Application configuration management

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window size, saved when the window closes
    pub window: WindowConfig,
    /// Directory the file dialogs start in
    pub last_directory: Option<PathBuf>,
    /// Show the rendered preview next to the editor
    pub show_preview: bool,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            last_directory: None,
            show_preview: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mdpad", "mdpad")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable config: {e:#}");
            Self::default()
        })
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }

    /// Record the window size; returns whether it changed
    pub fn remember_window_size(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        let window = WindowConfig { width, height };
        if window == self.window {
            return false;
        }
        self.window = window;
        true
    }

    /// Remember the directory containing `file` for the next dialog
    pub fn remember_directory(&mut self, file: &Path) {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.show_preview);
        assert_eq!(config.window.width, 800.0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.show_preview = false;
        config.remember_directory(Path::new("/tmp/notes/today.md"));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.last_directory, Some(PathBuf::from("/tmp/notes")));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "show_preview": false }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.show_preview);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_window_size_is_saved_and_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        assert!(config.remember_window_size(1024.0, 640.0));
        assert!(!config.remember_window_size(1024.0, 640.0));
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.window.width, 1024.0);
        assert_eq!(loaded.window.height, 640.0);
    }

    #[test]
    fn test_window_size_ignores_empty_viewport() {
        let mut config = AppConfig::default();
        assert!(!config.remember_window_size(0.0, 480.0));
        assert!(!config.remember_window_size(f32::NAN, 480.0));
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_remember_directory_ignores_bare_names() {
        let mut config = AppConfig::default();
        config.remember_directory(Path::new("untitled.md"));
        assert_eq!(config.last_directory, None);
    }
}
