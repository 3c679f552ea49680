use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::entry::Entry;

/// Execute the `phonebook add` command.
pub fn execute(ctx: &Context, name: &str, number: &str) -> Result<()> {
    let mut directory = super::directory_helpers::open_directory(ctx)?;

    let stored_as = directory.add(&Entry::new(name, number))?;
    output::success(&format!("Added {stored_as}: {number}"));

    Ok(())
}
