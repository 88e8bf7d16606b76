//! Single-slot report storage
//!
//! Keeps the last computed [`HealthReport`] as a JSON file. Saving replaces
//! the previous report; a missing file means there is no prior session.

use crate::error::{AppError, AppResult};
use health_planner_shared::HealthReport;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// File-backed slot holding one report
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last report, or `None` if nothing was saved yet
    pub async fn load(&self) -> AppResult<Option<HealthReport>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved report");
                return Ok(None);
            }
            Err(e) => return Err(AppError::storage(&self.path, e)),
        };

        match HealthReport::from_json(&raw) {
            Ok(report) => {
                debug!(path = %self.path.display(), date = %report.date, "Loaded saved report");
                Ok(Some(report))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Saved report could not be restored");
                Err(e.into())
            }
        }
    }

    /// Overwrite the slot with `report`
    ///
    /// Writes to a sibling temp file first and renames it into place so a
    /// crash never leaves a half-written report.
    pub async fn save(&self, report: &HealthReport) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::storage(parent, e))?;
        }

        let json = report.to_json()?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)
            .await
            .map_err(|e| AppError::storage(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::storage(&self.path, e))?;

        info!(path = %self.path.display(), "Report saved");
        Ok(())
    }

    /// Remove the saved report; returns whether one existed
    pub async fn clear(&self) -> AppResult<bool> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path.display(), "Report removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::storage(&self.path, e)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
