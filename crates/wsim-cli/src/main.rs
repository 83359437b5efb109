//! # wsim CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// worldsim CLI — schema-validated simulation data loading.
///
/// Loads the configured entity collections, validates every data file
/// against its JSON Schema, and reports on the loaded records.
#[derive(Parser, Debug)]
#[command(name = "wsim", version, about)]
struct Cli {
    #[command(flatten)]
    global: wsim_cli::GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Load every collection and print one line per entity record.
    Report,
    /// Check every collection's data file against its schema.
    Validate,
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // A bare `wsim` invocation runs the report.
    let command = cli.command.unwrap_or(Commands::Report);
    let result = match command {
        Commands::Report => wsim_cli::report::run(&cli.global),
        Commands::Validate => wsim_cli::validate::run(&cli.global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match command {
                // A failed load goes to stdout with this exact prefix;
                // the exit status is how callers detect the failure.
                Commands::Report => println!("Error loading simulation: {err}"),
                Commands::Validate => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
