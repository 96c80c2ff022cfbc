//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! all phonebook operations, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, fills in defaults from the
//! configuration (such as the page size) and returns structured
//! `Result<CmdResult>` values. It does no terminal I/O and holds no business
//! logic of its own.
//!
//! Configuration and `init` do not need records loaded, so clients call
//! `commands::config` and `commands::init` directly for those.
//!
//! `PhonebookApi<S: DataStore>` is generic over the persistence backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::book::RecordStore;
use crate::commands;
use crate::config::PhonebookConfig;
use crate::error::Result;
use crate::model::{Record, RecordFields, RecordId};
use crate::store::DataStore;

pub struct PhonebookApi<S: DataStore> {
    book: RecordStore<S>,
    config: PhonebookConfig,
}

impl<S: DataStore> PhonebookApi<S> {
    /// Loads the record store from `store`.
    pub fn new(store: S, config: PhonebookConfig) -> Result<Self> {
        let book = RecordStore::load(store)?;
        Ok(Self { book, config })
    }

    pub fn add_record(&mut self, fields: RecordFields) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, fields)
    }

    pub fn edit_record(&mut self, id: RecordId, fields: RecordFields) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.book, id, fields)
    }

    pub fn patch_record(
        &mut self,
        id: RecordId,
        input: commands::RecordInput,
    ) -> Result<commands::CmdResult> {
        commands::edit::patch(&mut self.book, id, input)
    }

    /// One page of records; `per_page` falls back to the configured size.
    pub fn list_records(&self, page: usize, per_page: Option<usize>) -> Result<commands::CmdResult> {
        commands::list::run(&self.book, page, per_page.unwrap_or(self.config.per_page))
    }

    pub fn search_records(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn view_records(&self, ids: &[RecordId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.book, ids)
    }

    /// A copy of one record, e.g. to prefill an edit prompt.
    pub fn record(&self, id: RecordId) -> Result<Record> {
        self.book.get(id)
    }

    pub fn page_count(&self) -> usize {
        self.book.page_count(self.config.per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PhonebookPaths, RecordInput};
