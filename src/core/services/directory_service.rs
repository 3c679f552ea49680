use crate::core::errors::{Lookup, PhonebookError, Result};
use crate::core::models::audit_entry::AuditEntry;
use crate::core::models::directory::Directory;
use crate::core::models::entry::Entry;
use crate::core::services::name_validator::{self, NameValidator};
use crate::core::services::phone_validator::PhoneNumberValidator;
use crate::core::traits::audit::AuditLogger;
use crate::core::traits::record_store::RecordStore;

/// The contact directory: validates candidate entries, owns the in-memory
/// table and keeps the record store and audit log in step with it.
///
/// Every mutation is applied to a copy of the table, persisted in full and
/// only then committed, so a failed write leaves the directory unchanged.
pub struct DirectoryService<S: RecordStore, A: AuditLogger> {
    store: S,
    audit: Option<A>,
    names: NameValidator,
    phones: PhoneNumberValidator,
    directory: Directory,
}

impl<S: RecordStore, A: AuditLogger> DirectoryService<S, A> {
    /// Load the directory from `store`. Loaded records are not revalidated.
    ///
    /// Pass `None` for `audit` to skip the audit trail.
    pub fn open(store: S, audit: Option<A>, names: NameValidator) -> Result<Self> {
        let directory = store.load()?;
        tracing::debug!(entries = directory.len(), "directory loaded");
        Ok(Self {
            store,
            audit,
            names,
            phones: PhoneNumberValidator::new(),
            directory,
        })
    }

    /// Validate and store `entry`. Returns the normalized name it was
    /// stored under.
    pub fn add(&mut self, entry: &Entry) -> Result<String> {
        let name = self.names.validate(&entry.name).inspect_err(|e| {
            tracing::debug!(name = %entry.name, error = ?e, "name rejected");
        })?;
        self.phones.validate(&entry.phone_number).inspect_err(|e| {
            tracing::debug!(number = %entry.phone_number, error = ?e, "phone number rejected");
        })?;

        let mut next = self.directory.clone();
        if !next.insert(name.clone(), entry.phone_number.clone()) {
            return Err(PhonebookError::DuplicateName { name });
        }
        self.commit(next)?;

        self.record(&AuditEntry::added(&name));
        Ok(name)
    }

    /// All entries in the directory's iteration order.
    pub fn list(&self) -> Vec<Entry> {
        let entries = self.directory.to_vec();
        self.record(&AuditEntry::listed());
        entries
    }

    /// Remove the entry stored under `name`. `Last, First` is accepted and
    /// looked up as `First Last`.
    pub fn delete_by_name(&mut self, name: &str) -> Result<Entry> {
        let key = name_validator::normalize(name).unwrap_or_else(|_| name.to_string());

        let mut next = self.directory.clone();
        let removed = next.remove_name(&key).ok_or(PhonebookError::NotFound {
            lookup: Lookup::Name(key),
        })?;
        self.commit(next)?;

        self.record(&AuditEntry::deleted(&removed.name));
        Ok(removed)
    }

    /// Remove the first entry whose phone number equals `number` exactly.
    pub fn delete_by_number(&mut self, number: &str) -> Result<Entry> {
        let mut next = self.directory.clone();
        let removed = next
            .remove_number(number)
            .ok_or_else(|| PhonebookError::NotFound {
                lookup: Lookup::Number(number.to_string()),
            })?;
        self.commit(next)?;

        self.record(&AuditEntry::deleted(&removed.name));
        Ok(removed)
    }

    #[cfg(test)]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    fn commit(&mut self, next: Directory) -> Result<()> {
        self.store.save(&next)?;
        tracing::debug!(entries = next.len(), "directory persisted");
        self.directory = next;
        Ok(())
    }

    /// Audit failures never undo a completed operation.
    fn record(&self, entry: &AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };
        if let Err(e) = logger.log_event(entry) {
            tracing::warn!(error = %e, "could not write audit log");
        }
    }
}
