use std::path::{Path, PathBuf};

use crate::config::app_config::AppConfig;
use crate::core::errors::{PhonebookError, Result};

/// Default project directory, relative to the working directory.
pub const DEFAULT_PROJECT_DIR: &str = ".phonebook";

/// Per-invocation settings resolved from the command line, handed to each
/// command.
#[derive(Debug, Clone)]
pub struct Context {
    project_dir: PathBuf,
}

impl Context {
    /// Use `custom` as the project directory, or `.phonebook` when absent.
    pub fn new(custom: Option<&str>) -> Self {
        Self {
            project_dir: PathBuf::from(custom.unwrap_or(DEFAULT_PROJECT_DIR)),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn is_initialized(&self) -> bool {
        self.project_dir.exists()
    }

    /// Load `config.toml`, failing unless `phonebook init` has been run.
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.is_initialized() {
            return Err(PhonebookError::InvalidConfig {
                detail: format!(
                    "Phone book not initialized ({} is missing). Run 'phonebook init' first.",
                    self.project_dir.display()
                ),
            });
        }
        AppConfig::load(&self.project_dir)
    }
}
