//! # Mock Engine
//!
//! A scriptable [`SchemaEngine`] for tests of engine-consuming code. The
//! mock never touches the filesystem; it returns one fixed outcome for
//! every call and counts how often it was asked to validate, which makes
//! short-circuit ordering in multi-collection loads directly assertable.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::{Conformance, EngineError, SchemaEngine, Violations};

/// The outcome a [`MockEngine`] is scripted to produce.
#[derive(Debug)]
enum MockOutcome {
    Conforms,
    Violates(Violations),
    Fails(String),
}

/// A scriptable engine with a fixed outcome and a call counter.
#[derive(Debug)]
pub struct MockEngine {
    outcome: MockOutcome,
    calls: AtomicUsize,
}

impl MockEngine {
    /// An engine that finds every document conforming.
    pub fn conforming() -> Self {
        Self {
            outcome: MockOutcome::Conforms,
            calls: AtomicUsize::new(0),
        }
    }

    /// An engine that reports these violations for every document.
    pub fn violating(violations: Violations) -> Self {
        Self {
            outcome: MockOutcome::Violates(violations),
            calls: AtomicUsize::new(0),
        }
    }

    /// An engine that fails to execute, as if the schema reference could
    /// not be resolved.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fails(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `validate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SchemaEngine for MockEngine {
    fn validate(&self, _document: &str, schema_path: &Path) -> Result<Conformance, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Conforms => Ok(Conformance::Conforms),
            MockOutcome::Violates(violations) => Ok(Conformance::Violates(violations.clone())),
            MockOutcome::Fails(reason) => Err(EngineError::SchemaRead {
                path: schema_path.display().to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
