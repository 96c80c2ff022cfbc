use crate::config::PhonebookConfig;
use crate::model::{Record, RecordFields};
use crate::paging::PageInfo;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    pub root: PathBuf,
}

impl PhonebookPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn data_file(&self, config: &PhonebookConfig) -> PathBuf {
        self.root.join(&config.data_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub config: Option<PhonebookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: PhonebookConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Field values as typed by a user, any of which may be missing.
///
/// The record store only accepts complete field sets, so this is turned into
/// [`RecordFields`] either from scratch ([`RecordInput::into_fields`]) or on
/// top of an existing record ([`RecordInput::merge`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub organization: Option<String>,
    pub work_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl RecordInput {
    /// Missing names become empty strings, missing optional fields stay absent.
    pub fn into_fields(self) -> RecordFields {
        RecordFields {
            last_name: self.last_name.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            middle_name: self.middle_name.unwrap_or_default(),
            organization: self.organization,
            work_phone: self.work_phone,
            personal_phone: self.personal_phone,
        }
    }

    /// Missing values are taken from `current`.
    pub fn merge(self, current: RecordFields) -> RecordFields {
        RecordFields {
            last_name: self.last_name.unwrap_or(current.last_name),
            first_name: self.first_name.unwrap_or(current.first_name),
            middle_name: self.middle_name.unwrap_or(current.middle_name),
            organization: self.organization.or(current.organization),
            work_phone: self.work_phone.or(current.work_phone),
            personal_phone: self.personal_phone.or(current.personal_phone),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_fields_fills_names_only() {
        let fields = RecordInput {
            first_name: Some("Jane".into()),
            work_phone: Some("1".into()),
            ..Default::default()
        }
        .into_fields();

        assert_eq!(fields.last_name, "");
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.organization, None);
        assert_eq!(fields.work_phone.as_deref(), Some("1"));
    }

    #[test]
    fn merge_keeps_current_values() {
        let current = RecordFields::new("Smith", "Jane").with_organization("Acme");
        let merged = RecordInput {
            last_name: Some("Jones".into()),
            organization: Some("".into()),
            ..Default::default()
        }
        .merge(current);

        assert_eq!(merged.last_name, "Jones");
        assert_eq!(merged.first_name, "Jane");
        assert_eq!(merged.organization.as_deref(), Some(""));
    }

    #[test]
    fn empty_input_merges_to_current() {
        let current = RecordFields::new("Smith", "Jane").with_personal_phone("2");
        assert!(RecordInput::default().is_empty());
        assert_eq!(RecordInput::default().merge(current.clone()), current);
    }
}
