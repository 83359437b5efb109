//! # Collection Configuration
//!
//! Which collections a simulation run loads, and from where. The standard
//! configuration is the fixed countries/events pair; a JSON config file
//! extends the set to further entity kinds without code changes. Load
//! order is configuration order, so the standard set always loads
//! countries before events.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the standard countries-backed collection.
pub const ENTITIES: &str = "entities";

/// Name of the standard events-backed collection.
pub const EVENTS: &str = "events";

/// Error in the collection configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file '{path}': {reason}")]
    Read {
        /// Path of the config file.
        path: String,
        /// Reason the read failed.
        reason: String,
    },

    /// The config file does not parse as a configuration document.
    #[error("cannot parse config file '{path}': {reason}")]
    Parse {
        /// Path of the config file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The configuration defines no collections at all.
    #[error("configuration defines no collections")]
    Empty,

    /// A collection entry has an empty name.
    #[error("collection at index {index} has an empty name")]
    EmptyName {
        /// Zero-based position of the entry.
        index: usize,
    },

    /// Two collection entries share a name.
    #[error("duplicate collection name '{name}'")]
    DuplicateName {
        /// The name that appears more than once.
        name: String,
    },
}

/// One named collection: where its data lives and which schema binds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSpec {
    /// Registry name of the collection.
    pub name: String,
    /// Path of the JSON data file (an array of objects).
    pub data: PathBuf,
    /// Path of the JSON Schema file the data must conform to.
    pub schema: PathBuf,
}

impl CollectionSpec {
    /// Create a spec from a name and its data/schema path pair.
    pub fn new(
        name: impl Into<String>,
        data: impl Into<PathBuf>,
        schema: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
            schema: schema.into(),
        }
    }
}

/// The collections one simulation run loads, in load order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    collections: Vec<CollectionSpec>,
}

impl SimulationConfig {
    /// Build a configuration from explicit collection specs.
    pub fn new(collections: Vec<CollectionSpec>) -> Self {
        Self { collections }
    }

    /// The standard configuration: `entities` from `countries.json` against
    /// `countries.schema.json`, then `events` from `events.json` against
    /// `events.schema.json`.
    pub fn standard() -> Self {
        Self::new(vec![
            CollectionSpec::new(ENTITIES, "countries.json", "countries.schema.json"),
            CollectionSpec::new(EVENTS, "events.json", "events.schema.json"),
        ])
    }

    /// Read a configuration from a JSON file.
    ///
    /// The file holds an object with a `collections` array of
    /// `{name, data, schema}` entries. The result is validated before it
    /// is returned.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve relative data and schema paths against a base directory.
    ///
    /// Absolute paths are kept as they are; only relative ones gain the
    /// prefix. With `"."` as the base this reproduces plain
    /// working-directory resolution.
    pub fn resolved_against(mut self, dir: &Path) -> Self {
        for spec in &mut self.collections {
            spec.data = dir.join(&spec.data);
            spec.schema = dir.join(&spec.schema);
        }
        self
    }

    /// Check the configuration shape: at least one collection, and every
    /// name non-empty and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collections.is_empty() {
            return Err(ConfigError::Empty);
        }
        let mut seen = HashSet::new();
        for (index, spec) in self.collections.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(ConfigError::EmptyName { index });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// The collection specs, in load order.
    pub fn collections(&self) -> &[CollectionSpec] {
        &self.collections
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::standard()
    }
}
