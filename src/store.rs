//! Record store
//!
//! Append-only, in-memory sequence of sales records. The realtime
//! endpoint appends while data endpoints scan, so both paths go through
//! a read-write lock: a reader sees the store before or after an append,
//! never a half-written record. Nothing is ever updated or deleted.

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::models::{FilterCriteria, SalesRecord};

pub struct RecordStore {
    records: RwLock<Vec<SalesRecord>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append records to the end of the store.
    pub fn append(&self, new_records: Vec<SalesRecord>) {
        self.records.write().extend(new_records);
    }

    /// Full copy of the current contents.
    pub fn snapshot(&self) -> Vec<SalesRecord> {
        self.records.read().clone()
    }

    /// Single-pass filtered scan; clones only the matching rows.
    pub fn filter(&self, criteria: &FilterCriteria, today: NaiveDate) -> Vec<SalesRecord> {
        self.records
            .read()
            .iter()
            .filter(|r| criteria.matches(r, today))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
