//! # wsim-cli — worldsim Command-Line Interface
//!
//! Thin clap front end over the domain crates: build the effective
//! collection configuration, hand it to `wsim-registry` with the real
//! schema engine, print what comes back.
//!
//! ## Subcommands
//!
//! - `report` — load every collection and print one line per entity
//!   record (the default when no subcommand is given)
//! - `validate` — check every collection's data file against its schema
//!   without building a registry
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to domain crates — no load or validation
//!   logic lives here.
//! - Handlers return errors instead of printing them; the single top-level
//!   catch in `main` owns the diagnostic format.

pub mod report;
pub mod validate;

use std::path::PathBuf;

use clap::Args;

use wsim_registry::{ConfigError, SimulationConfig};

/// Options every subcommand shares.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Directory against which relative data and schema paths resolve.
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON config file naming the collections to load, replacing the
    /// standard countries/events pair.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// The effective collection configuration for this invocation:
    /// the config file if one was given, otherwise the standard pair,
    /// resolved against the data directory.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)?,
            None => SimulationConfig::standard(),
        };
        Ok(config.resolved_against(&self.data_dir))
    }
}
