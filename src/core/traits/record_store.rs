use crate::core::errors::Result;
use crate::core::models::directory::Directory;

/// Port for persisting the whole directory table.
///
/// Implementations live in `adapters::stores`. Every mutation rewrites the
/// full table; there is no incremental append.
pub trait RecordStore {
    /// Read every stored record. A missing backing file yields an empty
    /// directory.
    fn load(&self) -> Result<Directory>;

    /// Overwrite the backing storage with `directory`.
    fn save(&self, directory: &Directory) -> Result<()>;
}
