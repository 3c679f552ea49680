use super::entry::Entry;

/// The in-memory table of stored entries, keyed by normalized name.
///
/// Names are unique and compared case-sensitively. Iteration follows
/// insertion order, which after a reload is the order of the record file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<Entry>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Returns the number stored under `name`, if any.
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.phone_number.as_str())
    }

    /// Insert if `name` is absent. Returns `false` and leaves the table
    /// untouched when the name is already present.
    pub fn insert(&mut self, name: String, phone_number: String) -> bool {
        if self.contains_name(&name) {
            return false;
        }
        self.entries.push(Entry { name, phone_number });
        true
    }

    /// Remove the entry stored under `name`.
    pub fn remove_name(&mut self, name: &str) -> Option<Entry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    /// Remove the first entry (in iteration order) whose number equals
    /// `phone_number`.
    pub fn remove_number(&mut self, phone_number: &str) -> Option<Entry> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.phone_number == phone_number)?;
        Some(self.entries.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Entry> {
        self.entries.clone()
    }
}
