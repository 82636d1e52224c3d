use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ReportError, ReportResult};
use crate::models::CorrelatedUser;
use tracing;

use super::render::render;
use super::sanitize::{is_safe_username, FilenameSanitizer};
use super::timestamp::extract_timestamp;

/// What reconciliation did to the report file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Created,
    Unchanged,
    Replaced,
}

pub struct Reconciler {
    report_dir: PathBuf,
    sanitizer: Box<dyn FilenameSanitizer>,
}

impl Reconciler {
    pub fn new(report_dir: impl Into<PathBuf>, sanitizer: Box<dyn FilenameSanitizer>) -> Self {
        Self {
            report_dir: report_dir.into(),
            sanitizer,
        }
    }

    // Create the report directory once at startup. Safe to repeat.
    pub fn ensure_report_dir(&self) -> ReportResult<()> {
        fs::create_dir_all(&self.report_dir).map_err(|e| {
            tracing::error!(
                "Failed to create report directory {}: {}",
                self.report_dir.display(),
                e
            );
            ReportError::Io(e)
        })
    }

    /// Brings the user's on-disk report in line with freshly rendered content.
    ///
    /// The decision is made by comparing both texts with their own embedded
    /// timestamp removed (first occurrence only): same content means no
    /// filesystem action, different content archives the old file under a
    /// timestamped name and writes the new one in its place.
    pub fn reconcile(
        &self,
        user: &CorrelatedUser,
        now: DateTime<Local>,
    ) -> ReportResult<ReportAction> {
        let username = &user.user.username;
        if !is_safe_username(username) {
            return Err(ReportError::UnsafeUsername(username.clone()));
        }

        let new_content = render(user, now);
        let new_timestamp = extract_timestamp(&new_content)
            .ok_or_else(|| ReportError::RenderInvariant(username.clone()))?;

        let report_path = self.report_dir.join(format!("{}.txt", username));
        if !report_path.exists() {
            tracing::debug!("No existing report for {}", username);
            write_report(&report_path, &new_content)?;
            return Ok(ReportAction::Created);
        }

        let existing_content = fs::read_to_string(&report_path).map_err(|e| {
            tracing::error!("Failed to read existing report {}: {}", report_path.display(), e);
            ReportError::Io(e)
        })?;

        // A file without a timestamp is malformed; refusing to touch it beats
        // silently overwriting whatever it holds.
        let existing_timestamp = extract_timestamp(&existing_content)
            .ok_or_else(|| ReportError::CorruptReport(report_path.display().to_string()))?;

        if new_content.replacen(new_timestamp, "", 1)
            == existing_content.replacen(existing_timestamp, "", 1)
        {
            tracing::debug!("Report for {} is unchanged", username);
            return Ok(ReportAction::Unchanged);
        }

        self.archive_report(&report_path, username, existing_timestamp)?;
        write_report(&report_path, &new_content)?;
        Ok(ReportAction::Replaced)
    }

    // Keep the superseded report under a name carrying its own timestamp.
    fn archive_report(
        &self,
        report_path: &Path,
        username: &str,
        timestamp: &str,
    ) -> ReportResult<()> {
        let archive_name = format!(
            "old_{}.txt_{}.txt",
            username,
            self.sanitizer.sanitize(timestamp)
        );
        let archive_path = self.report_dir.join(archive_name);

        tracing::debug!(
            "Archiving {} to {}",
            report_path.display(),
            archive_path.display()
        );
        fs::rename(report_path, &archive_path).map_err(|e| {
            tracing::error!(
                "Failed to archive report {} to {}: {}",
                report_path.display(),
                archive_path.display(),
                e
            );
            ReportError::Io(e)
        })
    }
}

fn write_report(path: &Path, content: &str) -> ReportResult<()> {
    fs::write(path, content).map_err(|e| {
        tracing::error!("Failed to write report {}: {}", path.display(), e);
        ReportError::Io(e)
    })
}
