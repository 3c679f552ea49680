use crate::core::errors::Result;
use crate::core::models::audit_entry::AuditEntry;

/// Port for the append-only audit trail.
///
/// Records are written once and never read back by the directory.
pub trait AuditLogger {
    /// Append an entry to the audit log.
    fn log_event(&self, entry: &AuditEntry) -> Result<()>;
}
