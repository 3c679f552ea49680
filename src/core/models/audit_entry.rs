use chrono::{DateTime, Local};

/// Operations that get recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditAction {
    Add,
    List,
    Delete,
}

/// A single line of the audit log.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub action: AuditAction,
    pub message: String,
}

impl AuditEntry {
    /// Build an entry stamped with the current local time.
    pub fn now(action: AuditAction, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            action,
            message: message.into(),
        }
    }

    pub fn added(name: &str) -> Self {
        Self::now(AuditAction::Add, format!("Added phone book entry for {name}."))
    }

    pub fn listed() -> Self {
        Self::now(AuditAction::List, "Listed the entries of the phonebook.")
    }

    pub fn deleted(name: &str) -> Self {
        Self::now(AuditAction::Delete, format!("Deleted entry for {name}."))
    }
}
