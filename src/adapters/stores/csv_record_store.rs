use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{PhonebookError, Result};
use crate::core::models::directory::Directory;
use crate::core::traits::record_store::RecordStore;

/// Record store backed by a two-column text file.
///
/// Format: one `name,phoneNumber` pair per line, no quoting or escaping.
/// Lines that do not split into exactly two fields are skipped on load.
///
/// Example `phonebook.csv`:
/// ```text
/// John Doe,670-123-4567
/// Jane Roe,12345
/// ```
#[derive(Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Split a line into `(name, number)`, if it has exactly two fields.
    fn parse_line(line: &str) -> Option<(&str, &str)> {
        let mut fields = line.split(',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(number), None) => Some((name, number)),
            _ => None,
        }
    }

    /// Serialize the table back to the file format.
    fn serialize(directory: &Directory) -> String {
        directory
            .iter()
            .map(|e| format!("{},{}\n", e.name, e.phone_number))
            .collect()
    }

    fn storage_error(&self, e: std::io::Error) -> PhonebookError {
        PhonebookError::StorageError {
            path: self.path.clone(),
            detail: e.to_string(),
        }
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> Result<Directory> {
        let mut directory = Directory::new();
        if !self.path.exists() {
            return Ok(directory);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;

        for (line_num, line) in content.lines().enumerate() {
            let Some((name, number)) = Self::parse_line(line) else {
                if !line.trim().is_empty() {
                    tracing::debug!(line = line_num + 1, "skipping malformed record");
                }
                continue;
            };

            if !directory.insert(name.to_string(), number.to_string()) {
                tracing::warn!(
                    line = line_num + 1,
                    name,
                    "skipping duplicate record; the first occurrence is kept"
                );
            }
        }

        Ok(directory)
    }

    fn save(&self, directory: &Directory) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }

        fs::write(&self.path, Self::serialize(directory)).map_err(|e| self.storage_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CsvRecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonebook.csv");
        let store = CsvRecordStore::new(path);
        (dir, store)
    }

    fn sample() -> Directory {
        let mut directory = Directory::new();
        directory.insert("John Doe".into(), "670-123-4567".into());
        directory.insert("Jane Roe".into(), "12345".into());
        directory
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_reload_preserves_order() {
        let (_dir, store) = temp_store();

        store.save(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), sample());
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "John Doe,670-123-4567\nJane Roe,12345\n"
        );
    }

    #[test]
    fn save_overwrites_whole_file() {
        let (_dir, store) = temp_store();
        store.save(&sample()).unwrap();

        let mut smaller = Directory::new();
        smaller.insert("Jim Poe".into(), "123-4567".into());
        store.save(&smaller).unwrap();

        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            "Jim Poe,123-4567\n"
        );
    }

    #[test]
    fn load_skips_lines_without_two_fields() {
        let (_dir, store) = temp_store();
        std::fs::write(
            store.path(),
            "John Doe,670-123-4567\n\njust a name\nDoe, John,12345\nJane Roe,12345\n",
        )
        .unwrap();

        let directory = store.load().unwrap();

        assert_eq!(directory, sample());
    }

    #[test]
    fn load_keeps_first_duplicate() {
        let (_dir, store) = temp_store();
        std::fs::write(store.path(), "John Doe,12345\nJohn Doe,670-123-4567\n").unwrap();

        let directory = store.load().unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("John Doe"), Some("12345"));
    }

    #[test]
    fn save_to_unwritable_path_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file.
        let store = CsvRecordStore::new(dir.path().to_path_buf());

        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(err, PhonebookError::StorageError { .. }));
    }

    #[test]
    fn parse_line_requires_exactly_two_fields() {
        assert_eq!(
            CsvRecordStore::parse_line("John Doe,12345"),
            Some(("John Doe", "12345"))
        );
        assert_eq!(CsvRecordStore::parse_line("John Doe"), None);
        assert_eq!(CsvRecordStore::parse_line("a,b,c"), None);
        assert_eq!(CsvRecordStore::parse_line(""), None);
    }
}
