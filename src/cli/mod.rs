pub mod commands;
pub mod context;
pub mod output;

use clap::{ArgGroup, Parser, Subcommand};

/// Validate, store and manage a directory of names and phone numbers.
#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory holding config, records and audit log
    #[arg(long, global = true, env = "PHONEBOOK_DIR")]
    pub dir: Option<String>,

    /// Verbose output (debug diagnostics on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a phone book in the current directory
    Init,

    /// Add an entry
    Add {
        /// Contact name, e.g. "John Doe" or "Doe, John"
        name: String,
        /// Phone number, e.g. 670-123-4567
        number: String,
    },

    /// List all entries
    List {
        /// Print entries as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Delete an entry by name or by phone number
    #[command(group(ArgGroup::new("target").required(true).args(["name", "number"])))]
    Delete {
        /// Name of the entry to delete ("Last, First" is accepted)
        #[arg(long)]
        name: Option<String>,
        /// Phone number of the entry to delete
        #[arg(long)]
        number: Option<String>,
    },

    /// Check a name and phone number without storing them
    Validate {
        /// Contact name
        name: String,
        /// Phone number
        number: String,
    },
}
