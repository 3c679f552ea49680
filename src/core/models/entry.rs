use serde::{Deserialize, Serialize};

/// A name and phone number pair, either submitted for storage or read
/// back from the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub phone_number: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let entry = Entry::new("John Doe", "670-123-4567");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"John Doe","phoneNumber":"670-123-4567"}"#);
    }
}
