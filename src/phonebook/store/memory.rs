use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail with an IO error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// What a fresh `load` would return.
    pub fn saved(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_saves {
            return Err(PhonebookError::Io(std::io::Error::other(
                "simulated save failure",
            )));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordFields;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        /// Adds `count` numbered contacts with consecutive ids.
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = RecordFields::new(format!("Last{}", i + 1), format!("First{}", i + 1))
                    .with_work_phone(format!("555-{:04}", i + 1));
                self = self.with_record(fields);
            }
            self
        }

        pub fn with_record(mut self, fields: RecordFields) -> Self {
            self.store.records.push(Record::new(self.next_id, fields));
            self.next_id += 1;
            self
        }

        /// Leaves `gap` unused ids before the next record.
        pub fn skip_ids(mut self, gap: u64) -> Self {
            self.next_id += gap;
            self
        }
    }
}
