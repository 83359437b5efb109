//! # Entity Collections
//!
//! An [`EntityCollection`] is the ordered sequence of records loaded from one
//! data file. It is created fresh on each load, never mutated afterwards, and
//! discarded at process exit; nothing in the stack persists collections.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// An ordered sequence of records, preserving data-file order.
///
/// Equality is field-for-field over all records, which makes repeat-load
/// comparisons directly assertable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCollection(Vec<Record>);

impl EntityCollection {
    /// Create a collection from records already in file order.
    pub fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty collection (an empty data file is valid).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The records as a slice, in file order.
    pub fn records(&self) -> &[Record] {
        &self.0
    }

    /// Iterate the records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }
}

impl FromIterator<Record> for EntityCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EntityCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntityCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
