//! # Schema Validation Engine
//!
//! Runtime validation of JSON documents against JSON Schema definitions
//! (Draft 2020-12).
//!
//! ## Verdict vs Failure
//!
//! A document that does not conform to its schema is a *verdict*, not an
//! engine failure: [`SchemaEngine::validate`] returns
//! `Ok(Conformance::Violates(..))` with the full violation list. An `Err`
//! means the engine itself could not execute — the schema file was
//! missing, unparseable, or not a buildable schema, or the document text
//! was not JSON at all.
//!
//! ## Schema Resolution
//!
//! Every call names one self-contained schema file. The engine reads it,
//! compiles it, runs the document against it, and drops it — no schema is
//! held in memory between calls, and no `$ref` resolution beyond what the
//! schema itself contains internally.

use std::fmt;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Error when the validation engine itself could not execute.
///
/// Distinct from a non-conforming document, which is a normal
/// [`Conformance::Violates`] outcome.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The schema file could not be read.
    #[error("cannot read schema '{path}': {reason}")]
    SchemaRead {
        /// Path of the schema file.
        path: String,
        /// Reason the read failed.
        reason: String,
    },

    /// The schema file is not valid JSON.
    #[error("schema '{path}' is not valid JSON: {reason}")]
    SchemaParse {
        /// Path of the schema file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The schema parsed as JSON but does not compile to a validator.
    #[error("schema '{path}' does not compile: {reason}")]
    SchemaCompile {
        /// Path of the schema file.
        path: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// The document text handed to the engine is not parseable JSON.
    #[error("document is not valid JSON: {reason}")]
    DocumentParse {
        /// Parser diagnostic.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// The ordered list of violations one validation produced.
///
/// Always non-empty when carried by [`Conformance::Violates`]; engines must
/// not report a violating document with an empty list.
#[derive(Debug, Clone)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Wrap violations in the order the engine reported them.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// The engine's verdict on one document.
#[derive(Debug, Clone)]
pub enum Conformance {
    /// The document satisfies every constraint of the schema.
    Conforms,
    /// The document is valid JSON but breaks one or more constraints.
    Violates(Violations),
}

impl Conformance {
    /// True for a conforming document.
    pub fn is_conforming(&self) -> bool {
        matches!(self, Self::Conforms)
    }

    /// The violations, when the document does not conform.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Conforms => None,
            Self::Violates(v) => Some(v),
        }
    }
}

/// Capability interface for schema validation.
///
/// Load logic depends on this trait, never on a concrete engine, so the
/// validation backend is swappable without touching the loader. The
/// `Send + Sync` bound keeps engines shareable behind references; it is an
/// API bound, not a concurrency feature — every caller in the stack is
/// single-threaded.
pub trait SchemaEngine: Send + Sync {
    /// Check `document` against the schema at `schema_path`.
    ///
    /// Pure over its inputs plus the filesystem read that resolves the
    /// schema reference; no other side effects.
    fn validate(&self, document: &str, schema_path: &Path) -> Result<Conformance, EngineError>;
}

/// The production engine, backed by the `jsonschema` crate.
///
/// Compiles schemas as Draft 2020-12. Stateless: each call reads and
/// compiles the named schema afresh, which keeps the engine trivially
/// consistent with schema files that change between runs.
#[derive(Debug, Default)]
pub struct JsonSchemaEngine;

impl JsonSchemaEngine {
    /// Create the engine.
    pub fn new() -> Self {
        Self
    }
}

impl SchemaEngine for JsonSchemaEngine {
    fn validate(&self, document: &str, schema_path: &Path) -> Result<Conformance, EngineError> {
        let schema_text =
            std::fs::read_to_string(schema_path).map_err(|e| EngineError::SchemaRead {
                path: schema_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let schema_value: Value =
            serde_json::from_str(&schema_text).map_err(|e| EngineError::SchemaParse {
                path: schema_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut options = jsonschema::options();
        options.with_draft(jsonschema::Draft::Draft202012);
        let validator = options
            .build(&schema_value)
            .map_err(|e| EngineError::SchemaCompile {
                path: schema_path.display().to_string(),
                reason: e.to_string(),
            })?;

        let instance: Value =
            serde_json::from_str(document).map_err(|e| EngineError::DocumentParse {
                reason: e.to_string(),
            })?;

        let violations: Vec<Violation> = validator
            .iter_errors(&instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();

        if violations.is_empty() {
            Ok(Conformance::Conforms)
        } else {
            Ok(Conformance::Violates(Violations::new(violations)))
        }
    }
}
