//! Immutable handle over a normalized record collection

use crate::AirportRecord;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::sync::Arc;

/// A normalized, read-only collection of airports
///
/// Cloning is cheap and clones share the same records. Every derived view
/// (filtered subsets, restricted sets for testing) is a new `Dataset`; the
/// records of an existing one are never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[AirportRecord]>,
}

impl Dataset {
    pub(crate) fn from_records(records: Vec<AirportRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// A dataset with no records
    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AirportRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive a new dataset holding the records that satisfy `predicate`,
    /// in their original order
    pub fn select<F>(&self, mut predicate: F) -> Dataset
    where
        F: FnMut(&AirportRecord) -> bool,
    {
        Self::from_records(self.iter().filter(|r| predicate(r)).cloned().collect())
    }

    /// Distinct airport types in order of first appearance
    pub fn type_domain(&self) -> Vec<&str> {
        distinct(self.iter().map(AirportRecord::airport_type))
    }

    /// Distinct states in order of first appearance
    pub fn state_domain(&self) -> Vec<&str> {
        distinct(self.iter().map(AirportRecord::state))
    }

    /// Whether both datasets share the same underlying storage
    pub fn shares_storage_with(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a AirportRecord;
    type IntoIter = std::slice::Iter<'a, AirportRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.iter())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
