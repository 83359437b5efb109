//! # wsim-schema — Schema Validation
//!
//! JSON Schema validation (Draft 2020-12) for the worldsim stack. Data
//! files are untrusted input; nothing downstream sees a record unless the
//! whole file passed its schema first.
//!
//! ## Engine (`engine`)
//!
//! The [`SchemaEngine`] trait is the seam between load logic and the
//! concrete validation backend. [`JsonSchemaEngine`] implements it with the
//! `jsonschema` crate. A non-conforming document is a normal
//! [`Conformance::Violates`] outcome carrying the full violation list; an
//! [`EngineError`] means the engine itself could not execute.
//!
//! ## Mock (`mock`)
//!
//! [`MockEngine`] is a scriptable engine for tests of engine-consuming
//! code: fixed outcome, no filesystem access, and a call counter that makes
//! short-circuit ordering assertable.
//!
//! ## Crate Policy
//!
//! - Depends on no other `wsim-*` crate.
//! - A document that fails its schema is never an `Err` — conflating the
//!   verdict with engine failure would hide broken setups behind bad data.
//! - Schemas are read per validation call and not retained afterwards.

pub mod engine;
pub mod mock;

pub use engine::{Conformance, EngineError, JsonSchemaEngine, SchemaEngine, Violation, Violations};
pub use mock::MockEngine;
