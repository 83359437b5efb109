//! # Simulation Registry
//!
//! The in-memory aggregate of every loaded collection for one run. Built
//! all-or-nothing by [`load_simulation`]: collections load strictly in
//! configuration order, the first failure aborts the whole build, and no
//! partial registry is ever observable.

use tracing::{debug, info};

use wsim_core::{EntityCollection, Record};
use wsim_schema::SchemaEngine;

use crate::config::{SimulationConfig, ENTITIES, EVENTS};
use crate::loader::{load_collection, LoadError};

/// Named entity collections, in load order.
///
/// Constructed once per invocation and never mutated afterwards. A record
/// is only present here if its enclosing file passed schema validation in
/// full.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRegistry {
    collections: Vec<(String, EntityCollection)>,
}

impl SimulationRegistry {
    /// Assemble a registry from named collections already in load order.
    pub fn new(collections: Vec<(String, EntityCollection)>) -> Self {
        Self { collections }
    }

    /// The collection with this name, if one was loaded.
    pub fn collection(&self, name: &str) -> Option<&EntityCollection> {
        self.collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, collection)| collection)
    }

    /// Records of the standard entities collection.
    ///
    /// Empty when the configuration defined no collection named
    /// [`ENTITIES`].
    pub fn entities(&self) -> &[Record] {
        self.collection(ENTITIES)
            .map(EntityCollection::records)
            .unwrap_or(&[])
    }

    /// Records of the standard events collection.
    ///
    /// Loaded and held like any other collection, though the entity report
    /// does not cover it.
    pub fn events(&self) -> &[Record] {
        self.collection(EVENTS)
            .map(EntityCollection::records)
            .unwrap_or(&[])
    }

    /// Collection names in load order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, collection)` pairs in load order.
    pub fn collections(&self) -> impl Iterator<Item = (&str, &EntityCollection)> {
        self.collections
            .iter()
            .map(|(name, collection)| (name.as_str(), collection))
    }

    /// Total records across all collections.
    pub fn record_count(&self) -> usize {
        self.collections.iter().map(|(_, c)| c.len()).sum()
    }
}

/// Load every configured collection into a fresh registry.
///
/// Collections load strictly in configuration order. The first failure
/// aborts the build and propagates the loader's error unmodified — the
/// error already names the file it concerns. For the standard
/// configuration this means a countries failure prevents the events file
/// from even being read.
pub fn load_simulation(
    config: &SimulationConfig,
    engine: &dyn SchemaEngine,
) -> Result<SimulationRegistry, LoadError> {
    config.validate()?;

    let mut collections = Vec::with_capacity(config.collections().len());
    for spec in config.collections() {
        debug!(
            collection = %spec.name,
            data = %spec.data.display(),
            schema = %spec.schema.display(),
            "loading collection"
        );
        let records = load_collection(&spec.data, &spec.schema, engine)?;
        info!(collection = %spec.name, records = records.len(), "collection loaded");
        collections.push((spec.name.clone(), records));
    }

    Ok(SimulationRegistry::new(collections))
}
