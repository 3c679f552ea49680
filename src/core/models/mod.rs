pub mod audit_entry;
pub mod directory;
pub mod entry;
