//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway for the record store.
//! It works on the whole collection at once: [`DataStore::load`] reads every
//! record at startup and [`DataStore::save`] overwrites everything after each
//! mutation. There are no partial writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, a single JSON file
//!   (`phonebook.json` by default) holding an array of records.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. It can be
//!   told to fail saves so persistence errors can be exercised.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── phonebook.json   # JSON array of records, ordered by id
//! └── config.json      # Configuration
//! ```

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Durable load/save of the full record collection.
pub trait DataStore {
    /// Read every stored record, in the order they were saved.
    ///
    /// Returns an empty vector when nothing has been saved yet.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace all stored data with exactly `records`.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}
