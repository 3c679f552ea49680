use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::app_config::AuditSection;
use crate::core::errors::{PhonebookError, Result};
use crate::core::models::audit_entry::AuditEntry;
use crate::core::traits::audit::AuditLogger;

/// Timestamp layout used at the start of every audit line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Audit logger that appends `<timestamp>: <message>` lines to a text file.
///
/// The file is opened in append mode for each record and closed again.
pub struct TextAuditLogger {
    log_path: PathBuf,
}

impl TextAuditLogger {
    /// Create a logger that writes to `{project_dir}/{log_file}`.
    pub fn new(project_dir: &Path, log_file: &str) -> Self {
        Self {
            log_path: project_dir.join(log_file),
        }
    }

    /// Create a logger from the `[audit]` section, falling back to
    /// `audit.log` when the section is missing.
    pub fn from_config(project_dir: &Path, audit_section: Option<&AuditSection>) -> Self {
        let log_file = audit_section
            .map(|a| a.log_file.as_str())
            .unwrap_or("audit.log");
        Self::new(project_dir, log_file)
    }

    /// Check whether auditing is enabled in the configuration.
    /// Returns `true` when the section is absent (enabled by default).
    pub fn is_enabled(audit_section: Option<&AuditSection>) -> bool {
        audit_section.map(|a| a.enabled).unwrap_or(true)
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn format_line(entry: &AuditEntry) -> String {
        format!(
            "{}: {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.message
        )
    }
}

impl AuditLogger for TextAuditLogger {
    fn log_event(&self, entry: &AuditEntry) -> Result<()> {
        if let Some(parent) = self.log_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PhonebookError::AuditError {
                detail: format!("Cannot open audit log at {}: {e}", self.log_path.display()),
            })?;

        writeln!(file, "{}", Self::format_line(entry)).map_err(|e| {
            PhonebookError::AuditError {
                detail: format!("Failed to write audit entry: {e}"),
            }
        })?;

        tracing::debug!(
            action = ?entry.action,
            path = %self.log_path.display(),
            "audit record written"
        );
        Ok(())
    }
}
