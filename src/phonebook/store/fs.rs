use super::DataStore;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        // Write the whole file next to the target, then swap it in
        let tmp = self.temp_path();
        let content = serde_json::to_string_pretty(records).map_err(PhonebookError::Serialization)?;
        fs::write(&tmp, content).map_err(PhonebookError::Io)?;
        fs::rename(&tmp, &self.path).map_err(PhonebookError::Io)?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordFields;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("phonebook.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_parent_dir_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("phonebook.json"));
        let records = vec![
            Record::new(1, RecordFields::new("Smith", "Jane").with_organization("")),
            Record::new(2, RecordFields::new("Doe", "John").with_personal_phone("555")),
        ];
        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("phonebook.json"));
        store
            .save(&[Record::new(1, RecordFields::new("A", "B"))])
            .unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn reads_original_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonebook.json");
        fs::write(
            &path,
            r#"[{"record_id": 1, "l_name": "Ivanov", "f_name": "Ivan", "m_name": "", "org": "", "w_phone": "", "p_phone": "123"}]"#,
        )
        .unwrap();

        let records = FileStore::new(&path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].last_name, "Ivanov");
        assert_eq!(records[0].personal_phone.as_deref(), Some("123"));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonebook.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, PhonebookError::Serialization(_)));
    }
}
