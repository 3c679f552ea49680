use crate::cli::context::Context;
use crate::cli::output;
use crate::config::app_config::{AppConfig, DEFAULT_CONFIG};
use crate::core::errors::{PhonebookError, Result};

/// Execute the `phonebook init` command.
///
/// Creates the project directory with a default `config.toml` and an
/// empty record file.
pub fn execute(ctx: &Context) -> Result<()> {
    let project_dir = ctx.project_dir();

    if ctx.is_initialized() {
        return Err(PhonebookError::InvalidConfig {
            detail: format!(
                "A phone book is already initialized here ({} exists)",
                project_dir.display()
            ),
        });
    }

    output::header("phonebook: initializing");

    std::fs::create_dir_all(project_dir)?;
    output::success(&format!("Created {}/", project_dir.display()));

    std::fs::write(project_dir.join("config.toml"), DEFAULT_CONFIG)?;
    output::success("Generated config.toml with defaults");

    let config = AppConfig::load(project_dir)?;
    let record_path = project_dir.join(&config.phonebook.record_file);
    std::fs::write(&record_path, "").map_err(|e| PhonebookError::StorageError {
        path: record_path.clone(),
        detail: e.to_string(),
    })?;
    output::success(&format!("Created empty {}", config.phonebook.record_file));

    println!("\n  Add your first entry: phonebook add \"Doe, John\" 670-123-4567");
    Ok(())
}
