//! In-memory record index keyed by record id.

use std::collections::HashMap;

use thiserror::Error;

use crate::model::Record;

/// Errors that can occur while building a store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate key '{0}'")]
    DuplicateKey(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Records indexed by their unique `id`.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: HashMap<String, Record>,
    /// Ids in insertion order
    order: Vec<String>,
}

impl RecordStore {
    /// Builds a store, failing on the first id seen twice.
    pub fn build<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::default();
        for record in records {
            if store.records.contains_key(&record.id) {
                return Err(StoreError::DuplicateKey(record.id));
            }
            store.order.push(record.id.clone());
            store.records.insert(record.id.clone(), record);
        }
        Ok(store)
    }

    /// Gets a record by id.
    pub fn lookup(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in the order the records were inserted.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Consumes the store, returning records in insertion order.
    pub fn into_records(mut self) -> Vec<Record> {
        self.order
            .iter()
            .filter_map(|id| self.records.remove(id))
            .collect()
    }
}
