mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    // Diagnostics go to stderr so list output stays clean.
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = Context::new(args.dir.as_deref());
    cli::output::set_quiet(args.quiet);

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(&ctx),
        Commands::Add { name, number } => cli::commands::add::execute(&ctx, name, number),
        Commands::List { json } => cli::commands::list::execute(&ctx, *json),
        Commands::Delete { name, number } => {
            cli::commands::delete::execute(&ctx, name.as_deref(), number.as_deref())
        }
        Commands::Validate { name, number } => {
            cli::commands::validate::execute(&ctx, name, number)
        }
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
