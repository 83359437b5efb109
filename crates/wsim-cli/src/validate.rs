//! # Validate Subcommand
//!
//! Checks every configured collection's data file against its schema and
//! prints one outcome per collection. No records are deserialized and no
//! registry is built; this is the preflight check for a data directory.

use anyhow::bail;

use wsim_registry::check_collection;
use wsim_schema::{Conformance, JsonSchemaEngine};

use crate::GlobalArgs;

/// Validate every configured collection, printing per-collection outcomes.
///
/// Unlike the load pipeline this does not short-circuit: every collection
/// is checked, so one bad file cannot hide another.
pub fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = global.simulation_config()?;
    let engine = JsonSchemaEngine::new();

    let total = config.collections().len();
    let mut failed = 0usize;

    for spec in config.collections() {
        match check_collection(&spec.data, &spec.schema, &engine) {
            Ok(Conformance::Conforms) => {
                println!("ok {} ({})", spec.name, spec.data.display());
            }
            Ok(Conformance::Violates(violations)) => {
                println!("FAIL {} ({}):", spec.name, spec.data.display());
                println!("{violations}");
                failed += 1;
            }
            Err(e) => {
                println!("FAIL {} ({}): {e}", spec.name, spec.data.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {total} collections failed validation");
    }
    Ok(())
}
