use colored::Colorize;

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::entry::Entry;

/// Execute the `phonebook list` command.
pub fn execute(ctx: &Context, json: bool) -> Result<()> {
    let directory = super::directory_helpers::open_directory(ctx)?;
    let entries = directory.list();

    if json {
        let rendered = serde_json::to_string_pretty(&entries).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    if entries.is_empty() {
        output::warning("The phone book is empty.");
        println!("  Run 'phonebook add <name> <number>' to add an entry.");
        return Ok(());
    }

    output::header(&format!("Phone book ({} entries)", entries.len()));
    print_table(&entries);

    Ok(())
}

fn print_table(entries: &[Entry]) {
    let width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in entries {
        // Pad before coloring so escape codes don't count toward the width.
        let name = format!("{:<width$}", entry.name);
        println!("  {} {} {}", name.bold(), "│".dimmed(), entry.phone_number);
    }
}
