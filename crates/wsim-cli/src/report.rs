//! # Report Subcommand
//!
//! Loads the full simulation and prints the entity report to stdout. This
//! is what a bare `wsim` invocation runs.

use std::io::{self, Write};

use tracing::debug;

use wsim_registry::{load_simulation, write_report};
use wsim_schema::JsonSchemaEngine;

use crate::GlobalArgs;

/// Load every configured collection and write the entity report.
pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = global.simulation_config()?;
    let engine = JsonSchemaEngine::new();

    let registry = load_simulation(&config, &engine)?;
    debug!(records = registry.record_count(), "simulation loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&registry, &mut out)?;
    out.flush()?;
    Ok(())
}
