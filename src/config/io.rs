//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;
use crate::atomic_file::write_locked;
use crate::report::ReportStore;

impl Config {
    /// Get the global config directory path (~/.salesdeck/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".salesdeck")
    }

    /// Get the global config file path (~/.salesdeck/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    ///
    /// Parse errors are logged and also fall back to defaults so the GUI
    /// always starts.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(
                    "[salesdeck] Failed to parse config ({}): {:#}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a file with atomic write and file locking.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        write_locked(path, content.as_bytes(), "toml.lock", "toml.tmp")
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Report store configured in settings, or the default location
    pub fn report_store(&self) -> ReportStore {
        let configured = self.settings.report_store_path.trim();
        if configured.is_empty() {
            ReportStore::new(ReportStore::default_path())
        } else {
            ReportStore::new(configured)
        }
    }

    /// Mapping file configured in settings, if any
    pub fn mapping_path(&self) -> Option<PathBuf> {
        let configured = self.settings.gui.mapping_path.trim();
        (!configured.is_empty()).then(|| PathBuf::from(configured))
    }
}
