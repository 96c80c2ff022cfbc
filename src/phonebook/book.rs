//! # Record Store
//!
//! [`RecordStore`] owns the in-memory sequence of records and is the only
//! thing that mutates it. Invariants:
//!
//! - records are kept in strictly increasing `id` order (binary search
//!   depends on this)
//! - ids are unique and never reused
//! - the next id is the largest id plus one, or 1 for an empty store
//!
//! Every successful mutation is flushed to the [`DataStore`] before the
//! operation returns. A failed save is surfaced to the caller but the
//! in-memory change is kept, so memory and disk can disagree until the next
//! successful save.

use crate::error::{PhonebookError, Result};
use crate::model::{Record, RecordFields, RecordId};
use crate::paging;
use crate::store::DataStore;
use std::cmp::Ordering;

pub struct RecordStore<S: DataStore> {
    store: S,
    records: Vec<Record>,
    // Loaded out of order; cleared once a sorted copy is saved
    reordered: bool,
}

impl<S: DataStore> RecordStore<S> {
    /// Loads every record from `store`.
    ///
    /// Data saved out of order is re-sorted by id. Duplicate or zero ids mean
    /// the data is corrupt and loading fails.
    pub fn load(store: S) -> Result<Self> {
        let mut records = store.load()?;

        let reordered = !records.windows(2).all(|w| w[0].id < w[1].id);
        if reordered {
            tracing::warn!("stored records were not ordered by id, re-sorting");
            records.sort_by_key(|r| r.id);
        }
        if let Some(r) = records.iter().find(|r| r.id == 0) {
            return Err(PhonebookError::Store(format!(
                "invalid record id {} in stored data",
                r.id
            )));
        }
        if let Some(w) = records.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(PhonebookError::Store(format!(
                "duplicate record id {} in stored data",
                w[0].id
            )));
        }

        tracing::debug!(count = records.len(), "record store loaded");
        Ok(Self {
            store,
            records,
            reordered,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of every record, in id order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True while the stored data is still in the out-of-order form it was
    /// loaded in.
    pub fn was_reordered(&self) -> bool {
        self.reordered
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> Result<RecordId> {
        match self.records.last() {
            None => Ok(1),
            Some(last) => last
                .id
                .checked_add(1)
                .ok_or_else(|| PhonebookError::Store("record id space exhausted".to_string())),
        }
    }

    pub fn add(&mut self, fields: RecordFields) -> Result<Record> {
        let record = Record::new(self.next_id()?, fields);
        // Appending keeps the order since the new id is larger than all others
        self.records.push(record.clone());
        tracing::debug!(id = record.id, "record added");
        self.flush()?;
        Ok(record)
    }

    /// Position of the record with `id`, by binary search.
    pub fn find_by_id(&self, id: RecordId) -> Result<usize> {
        let mut low = 0;
        let mut high = self.records.len();
        while low < high {
            let mid = low + (high - low) / 2;
            match self.records[mid].id.cmp(&id) {
                Ordering::Greater => high = mid,
                Ordering::Less => low = mid + 1,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(PhonebookError::NotFound(id))
    }

    /// A copy of the record with `id`.
    pub fn get(&self, id: RecordId) -> Result<Record> {
        let idx = self.find_by_id(id)?;
        Ok(self.records[idx].clone())
    }

    /// Overwrites all six editable fields of the record with `id`.
    ///
    /// Partial edits are not supported: to keep a field, pass its current
    /// value. Unknown ids leave the store untouched.
    pub fn edit_by_id(&mut self, id: RecordId, fields: RecordFields) -> Result<Record> {
        let idx = self.find_by_id(id)?;
        self.records[idx].apply(fields);
        let record = self.records[idx].clone();
        tracing::debug!(id, "record edited");
        self.flush()?;
        Ok(record)
    }

    /// Records on 1-based `page`, clipped to the store's bounds.
    pub fn range_by_page(&self, page: usize, per_page: usize) -> Vec<Record> {
        let range = paging::page_bounds(page, per_page, self.records.len());
        self.records[range].to_vec()
    }

    pub fn page_count(&self, per_page: usize) -> usize {
        paging::page_count(self.records.len(), per_page)
    }

    /// Records with `query` in any text field, ignoring case, in store order.
    pub fn search(&self, query: &str) -> Vec<Record> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches(&needle))
            .cloned()
            .collect()
    }

    fn flush(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.records) {
            tracing::warn!(error = %e, "failed to save records, memory and disk now differ");
            return Err(e);
        }
        self.reordered = false;
        Ok(())
    }
}
