//! # wsim-core — Foundational Types for the worldsim stack
//!
//! Defines the record model shared by every other crate in the workspace.
//! A [`Record`] is one entity loaded from a data file (a country, an event);
//! an [`EntityCollection`] is an ordered sequence of records preserving the
//! order of the file they came from.
//!
//! ## Key Design Principles
//!
//! 1. **Dynamic values stay dynamic.** Data files carry arbitrary fields, so
//!    a record wraps a JSON object map rather than a fixed struct. Fields the
//!    schema never mentions are preserved verbatim, not stripped.
//!
//! 2. **Typed access never panics.** The `require_*` accessors return a
//!    structured [`FieldError`] on a missing field or a wrong-type access.
//!    There is no indexing path that can panic on malformed data.
//!
//! 3. **Order is meaningful.** Collections keep file order exactly. No
//!    reordering, filtering, or deduplication happens anywhere in the stack.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wsim-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod collection;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use collection::EntityCollection;
pub use record::{json_type_name, FieldError, Record};
