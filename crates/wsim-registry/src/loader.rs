//! # Entity Loader
//!
//! Loads one collection: read the data file, have the schema engine check
//! it, then deserialize the records. A single invalid record fails the
//! whole file — nothing is ever loaded partially.
//!
//! The deserialization step re-parses text the engine already looked at.
//! That is deliberate, not an accident of layering: the engine is
//! swappable, and a permissive engine must not let syntactically bad input
//! reach the record model undetected.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use wsim_core::{EntityCollection, Record};
use wsim_schema::{Conformance, EngineError, SchemaEngine, Violations};

use crate::config::ConfigError;

/// Error loading the simulation.
///
/// Every variant names the file it concerns. The loader never retries or
/// recovers, so one of these aborts the whole load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The data file is missing or unreadable.
    #[error("cannot read data file '{path}': {source}")]
    FileRead {
        /// Path of the data file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The validation engine itself could not execute.
    #[error("validation engine error: {0}")]
    Engine(#[from] EngineError),

    /// The document is well-formed JSON but violates its schema.
    #[error("validation failed against schema '{schema}':\n{violations}")]
    SchemaViolation {
        /// Path of the schema the document was checked against.
        schema: String,
        /// Every violation the engine reported, in engine order.
        violations: Violations,
    },

    /// The document cannot be parsed as a JSON array of objects.
    #[error("malformed JSON in '{path}': {reason}")]
    MalformedJson {
        /// Path of the data file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The simulation configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Read a data file's text, classifying failures per the load taxonomy.
///
/// A read failure is [`LoadError::FileRead`]; bytes that are not UTF-8 are
/// [`LoadError::MalformedJson`], since JSON text is UTF-8 by definition.
fn read_text(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| LoadError::MalformedJson {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Check one data file against its schema without loading any records.
///
/// A non-conforming file is an `Ok(Conformance::Violates(..))` verdict
/// here, not an error — callers decide what to make of it.
pub fn check_collection(
    data_path: &Path,
    schema_path: &Path,
    engine: &dyn SchemaEngine,
) -> Result<Conformance, LoadError> {
    let text = read_text(data_path)?;
    Ok(engine.validate(&text, schema_path)?)
}

/// Load one collection: read, validate, deserialize.
///
/// Records come back in file order; nothing is reordered, filtered, or
/// deduplicated, and fields the schema never mentions are preserved. An
/// empty array is a valid file and loads as an empty collection.
pub fn load_collection(
    data_path: &Path,
    schema_path: &Path,
    engine: &dyn SchemaEngine,
) -> Result<EntityCollection, LoadError> {
    let text = read_text(data_path)?;
    debug!(path = %data_path.display(), bytes = text.len(), "data file read");

    match engine.validate(&text, schema_path)? {
        Conformance::Conforms => {}
        Conformance::Violates(violations) => {
            return Err(LoadError::SchemaViolation {
                schema: schema_path.display().to_string(),
                violations,
            });
        }
    }
    debug!(path = %data_path.display(), schema = %schema_path.display(), "schema check passed");

    let records: Vec<Record> =
        serde_json::from_str(&text).map_err(|e| LoadError::MalformedJson {
            path: data_path.display().to_string(),
            reason: e.to_string(),
        })?;

    Ok(EntityCollection::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use wsim_schema::{MockEngine, Violation};

    fn data_file(content: &[u8]) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    fn schema_path() -> PathBuf {
        PathBuf::from("countries.schema.json")
    }

    fn one_violation() -> Violations {
        Violations::new(vec![Violation {
            instance_path: "/0".to_string(),
            schema_path: "/items/required".to_string(),
            message: "\"code\" is a required property".to_string(),
        }])
    }

    #[test]
    fn test_loads_records_in_file_order() {
        let (_dir, path) = data_file(br#"[{"id":3},{"id":1},{"id":2}]"#);
        let engine = MockEngine::conforming();
        let records = load_collection(&path, &schema_path(), &engine).unwrap();
        let ids: Vec<i64> = records
            .iter()
            .map(|r| r.require_i64("id").unwrap())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(engine.calls(), 1);
    }

    #[test]
    fn test_empty_array_loads_empty_collection() {
        let (_dir, path) = data_file(b"[]");
        let engine = MockEngine::conforming();
        let records = load_collection(&path, &schema_path(), &engine).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let (_dir, path) = data_file(br#"[{"id":1,"flag":"unscheduled"}]"#);
        let engine = MockEngine::conforming();
        let records = load_collection(&path, &schema_path(), &engine).unwrap();
        assert_eq!(records.records()[0].require_str("flag").unwrap(), "unscheduled");
    }

    #[test]
    fn test_missing_file_is_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("countries.json");
        let engine = MockEngine::conforming();
        let err = load_collection(&missing, &schema_path(), &engine).unwrap_err();
        match err {
            LoadError::FileRead { path, .. } => assert!(path.contains("countries.json")),
            other => panic!("expected FileRead, got: {other}"),
        }
        // The file read failed, so the engine was never consulted.
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_violating_engine_is_schema_violation() {
        let (_dir, path) = data_file(br#"[{"id":1}]"#);
        let engine = MockEngine::violating(one_violation());
        let err = load_collection(&path, &schema_path(), &engine).unwrap_err();
        match err {
            LoadError::SchemaViolation { schema, violations } => {
                assert_eq!(schema, "countries.schema.json");
                assert_eq!(violations.len(), 1);
            }
            other => panic!("expected SchemaViolation, got: {other}"),
        }
    }

    #[test]
    fn test_failing_engine_is_engine_error() {
        let (_dir, path) = data_file(b"[]");
        let engine = MockEngine::failing("schema store offline");
        let err = load_collection(&path, &schema_path(), &engine).unwrap_err();
        assert!(
            matches!(err, LoadError::Engine(EngineError::SchemaRead { .. })),
            "expected Engine(SchemaRead), got: {err}"
        );
    }

    #[test]
    fn test_top_level_object_is_malformed_json() {
        // A conforming engine lets the independent parse catch the shape.
        let (_dir, path) = data_file(br#"{"id":1}"#);
        let engine = MockEngine::conforming();
        let err = load_collection(&path, &schema_path(), &engine).unwrap_err();
        assert!(
            matches!(err, LoadError::MalformedJson { .. }),
            "expected MalformedJson, got: {err}"
        );
    }

    #[test]
    fn test_non_object_elements_are_malformed_json() {
        let (_dir, path) = data_file(b"[1, 2, 3]");
        let engine = MockEngine::conforming();
        let err = load_collection(&path, &schema_path(), &engine).unwrap_err();
        assert!(
            matches!(err, LoadError::MalformedJson { .. }),
            "expected MalformedJson, got: {err}"
        );
    }

    #[test]
    fn test_non_utf8_bytes_are_malformed_json() {
        let (_dir, path) = data_file(&[0x5b, 0xff, 0xfe, 0x5d]);
        let engine = MockEngine::conforming();
        let err = load_collection(&path, &schema_path(), &engine).unwrap_err();
        assert!(
            matches!(err, LoadError::MalformedJson { .. }),
            "expected MalformedJson, got: {err}"
        );
        // Classified before the engine sees the text.
        assert_eq!(engine.calls(), 0);
    }

    #[test]
    fn test_check_collection_returns_verdict_not_error() {
        let (_dir, path) = data_file(br#"[{"id":1}]"#);
        let engine = MockEngine::violating(one_violation());
        let verdict = check_collection(&path, &schema_path(), &engine).unwrap();
        assert!(!verdict.is_conforming());
        assert_eq!(verdict.violations().unwrap().len(), 1);
    }

    #[test]
    fn test_check_collection_missing_file_is_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let engine = MockEngine::conforming();
        let err = check_collection(&dir.path().join("gone.json"), &schema_path(), &engine)
            .unwrap_err();
        assert!(matches!(err, LoadError::FileRead { .. }));
    }

    #[test]
    fn test_load_error_display_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("events.json");
        let engine = MockEngine::conforming();
        let err = load_collection(&missing, &schema_path(), &engine).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("events.json"), "got: {text}");
        assert!(text.starts_with("cannot read data file"), "got: {text}");
    }
}
