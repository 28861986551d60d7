//! Response store entity

use super::value::ResponseValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated answers for one session (Entity).
///
/// [`set`](ResponseStore::set) is the single mutation entry point: entries
/// are only ever added or overwritten, never removed. The store is created
/// empty at session start and discarded with the session — nothing is
/// persisted. Keys are ordered so anything derived from the store is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseStore {
    entries: BTreeMap<String, ResponseValue>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any previous value for the same id.
    pub fn set(&mut self, id: impl Into<String>, value: ResponseValue) {
        self.entries.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&ResponseValue> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
