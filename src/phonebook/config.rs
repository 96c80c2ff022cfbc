use crate::error::{PhonebookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PER_PAGE: usize = 5;
const DEFAULT_DATA_FILE: &str = "phonebook.json";

/// Configuration for phonebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Records shown per page when listing
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Name of the records file inside the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl PhonebookConfig {
    pub const KEYS: [&'static str; 2] = ["per-page", "data-file"];

    fn path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }

    /// Reads `config.json` from `config_dir`. A missing file gives defaults,
    /// values `set` would refuse are rejected.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let content = match fs::read_to_string(Self::path(config_dir.as_ref())) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let config: PhonebookConfig = serde_json::from_str(&content)?;
        config.validate().map_err(PhonebookError::Config)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        fs::write(Self::path(config_dir), serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.per_page == 0 {
            return Err("per_page must be at least 1".to_string());
        }
        if self.data_file.trim().is_empty() {
            return Err("data_file cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "per-page" => Some(self.per_page.to_string()),
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    /// Sets `key` from user text and returns the value as stored.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<String, String> {
        let value = value.trim();
        match key {
            "per-page" => match value.parse::<usize>() {
                Ok(n) if n > 0 => self.per_page = n,
                _ => return Err(format!("per-page must be a positive number, got: {}", value)),
            },
            "data-file" if value.is_empty() => return Err("data-file cannot be empty".to_string()),
            "data-file" => self.data_file = value.to_string(),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.per_page, 5);
        assert_eq!(config.data_file, "phonebook.json");
    }

    #[test]
    fn test_set_per_page() {
        let mut config = PhonebookConfig::default();
        config.set("per-page", "10").unwrap();
        assert_eq!(config.per_page, 10);
        assert!(config.set("per-page", "0").is_err());
        assert!(config.set("per-page", "ten").is_err());
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut config = PhonebookConfig::default();
        assert!(config.set("color", "red").is_err());
        assert_eq!(config.get("color"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PhonebookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = PhonebookConfig::default();
        config.set("data-file", "contacts.json").unwrap();
        config.save(&dir).unwrap();

        let loaded = PhonebookConfig::load(&dir).unwrap();
        assert_eq!(loaded.data_file, "contacts.json");
        assert_eq!(loaded.per_page, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"per_page": 3}"#).unwrap();

        let loaded = PhonebookConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.per_page, 3);
        assert_eq!(loaded.data_file, "phonebook.json");
    }

    #[test]
    fn test_set_returns_stored_value() {
        let mut config = PhonebookConfig::default();
        assert_eq!(config.set("data-file", "  book.json "), Ok("book.json".to_string()));
        assert_eq!(config.data_file, "book.json");
        assert!(config.set("data-file", "   ").is_err());
    }

    #[test]
    fn test_empty_data_file_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"data_file": ""}"#).unwrap();
        assert!(matches!(
            PhonebookConfig::load(temp_dir.path()),
            Err(PhonebookError::Config(_))
        ));
    }

    #[test]
    fn test_zero_per_page_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"per_page": 0}"#).unwrap();
        assert!(matches!(
            PhonebookConfig::load(temp_dir.path()),
            Err(PhonebookError::Config(_))
        ));
    }
}
