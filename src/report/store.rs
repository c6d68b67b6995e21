//! JSON persistence for the report accumulator

use std::path::{Path, PathBuf};

use super::ReportAccumulator;
use crate::atomic_file::{write_locked, AtomicWriteError};

#[derive(Debug, thiserror::Error)]
pub enum ReportStoreError {
    #[error("Report store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid report store JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write report store: {0}")]
    Write(#[from] AtomicWriteError),
}

/// File-backed storage for accumulated reports
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: ~/.salesdeck/reports.json
    pub fn default_path() -> PathBuf {
        crate::config::Config::global_config_dir().join("reports.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load reports. A missing file is an empty accumulator.
    pub fn load(&self) -> Result<ReportAccumulator, ReportStoreError> {
        if !self.path.exists() {
            return Ok(ReportAccumulator::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(ReportAccumulator::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Save reports under an exclusive lock, via temp file + rename
    pub fn save(&self, reports: &ReportAccumulator) -> Result<(), ReportStoreError> {
        let content = serde_json::to_string_pretty(reports)?;
        write_locked(&self.path, content.as_bytes(), "json.lock", "json.tmp")?;

        tracing::debug!(
            "Saved {} reports to {}",
            reports.len(),
            self.path.display()
        );
        Ok(())
    }
}
