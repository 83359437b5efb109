//! # wsim-registry — Simulation Loading
//!
//! Turns data files on disk into an in-memory [`SimulationRegistry`], and
//! renders the registry's entity report. The pipeline per collection is
//! fixed: read the file, have the schema engine check it, deserialize the
//! records — in that order, with no recovery or retry at any step.
//!
//! ## Modules
//!
//! - [`config`] — which collections to load and from where; the standard
//!   countries/events pair, or a JSON config file for further kinds.
//! - [`loader`] — the per-collection pipeline and the [`LoadError`]
//!   taxonomy every failure falls into.
//! - [`registry`] — the all-or-nothing registry builder and the registry
//!   itself.
//! - [`report`] — the `Entity: <type> <id> <name>` summary lines.
//!
//! ## Crate Policy
//!
//! - Loads are strictly sequential and all-or-nothing: the first failing
//!   collection aborts the whole build, and no partial registry is ever
//!   observable.
//! - Errors propagate unmodified to the caller; nothing here prints,
//!   retries, or rewrites a failure.
//! - Validation goes through the [`wsim_schema::SchemaEngine`] trait, never
//!   a concrete engine.

pub mod config;
pub mod loader;
pub mod registry;
pub mod report;

// Re-export primary types for ergonomic imports.
pub use config::{CollectionSpec, ConfigError, SimulationConfig, ENTITIES, EVENTS};
pub use loader::{check_collection, load_collection, LoadError};
pub use registry::{load_simulation, SimulationRegistry};
pub use report::{entity_line, write_report};
