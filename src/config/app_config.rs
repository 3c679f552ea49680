use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{PhonebookError, Result};

/// Top-level configuration read from `.phonebook/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub phonebook: PhonebookSection,
    #[serde(default)]
    pub validation: ValidationSection,
    pub audit: Option<AuditSection>,
}

impl AppConfig {
    /// Load the configuration from `{project_dir}/config.toml`.
    ///
    /// File names in the config must be plain names inside the project
    /// directory.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join("config.toml");
        if !config_path.exists() {
            return Err(PhonebookError::InvalidConfig {
                detail: "config.toml not found. Run 'phonebook init' first.".into(),
            });
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::parse(&content)?;

        validate_simple_filename(&config.phonebook.record_file, "record file")?;
        if let Some(audit) = &config.audit {
            validate_simple_filename(&audit.log_file, "audit log file")?;
        }

        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PhonebookError::InvalidConfig {
            detail: format!("Failed to parse config.toml: {e}"),
        })
    }
}

/// Contents written by `phonebook init`.
pub const DEFAULT_CONFIG: &str = r#"[phonebook]
version = "0.1.0"
record_file = "phonebook.csv"

[validation]
enforce_name_shape = true

[audit]
enabled = true
log_file = "audit.log"
"#;

/// The `[phonebook]` section. The `version` key written by `init` is
/// informational and not read back.
#[derive(Debug, Clone, Deserialize)]
pub struct PhonebookSection {
    #[serde(default = "default_record_file")]
    pub record_file: String,
}

fn default_record_file() -> String {
    "phonebook.csv".to_string()
}

/// The `[validation]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationSection {
    /// Apply the declarative name shape and length check.
    #[serde(default = "default_true")]
    pub enforce_name_shape: bool,
}

impl Default for ValidationSection {
    fn default() -> Self {
        Self {
            enforce_name_shape: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The `[audit]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditSection {
    pub enabled: bool,
    pub log_file: String,
}

/// Reject file names that could escape the project directory.
pub fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(PhonebookError::InvalidConfig {
            detail: format!("Invalid {what} name '{name}': must be a plain file name"),
        });
    }
    Ok(())
}
