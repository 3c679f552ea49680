use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `phonebook delete` command.
///
/// Exactly one of `name` or `number` is set; clap enforces this.
pub fn execute(ctx: &Context, name: Option<&str>, number: Option<&str>) -> Result<()> {
    let mut directory = super::directory_helpers::open_directory(ctx)?;

    let removed = match (name, number) {
        (Some(name), _) => directory.delete_by_name(name)?,
        (None, Some(number)) => directory.delete_by_number(number)?,
        (None, None) => unreachable!("clap requires --name or --number"),
    };

    output::success(&format!(
        "Deleted {}: {}",
        removed.name, removed.phone_number
    ));
    Ok(())
}
