use serde::{Deserialize, Serialize};

/// Identifier assigned by the record store. Always positive.
pub type RecordId = u64;

/// The six fields a caller may supply when adding or editing a record.
///
/// Optional fields keep absence distinct from the empty string: `None` is
/// shown as "no information", `Some("")` as a blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFields {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: Option<String>,
    pub work_phone: Option<String>,
    pub personal_phone: Option<String>,
}

impl RecordFields {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ..Self::default()
        }
    }

    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = middle_name.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_work_phone(mut self, phone: impl Into<String>) -> Self {
        self.work_phone = Some(phone.into());
        self
    }

    pub fn with_personal_phone(mut self, phone: impl Into<String>) -> Self {
        self.personal_phone = Some(phone.into());
        self
    }
}

/// One contact entry.
///
/// Serialized with the short field names used by existing `phonebook.json`
/// files, so data written by earlier versions loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "record_id")]
    pub id: RecordId,
    #[serde(rename = "l_name")]
    pub last_name: String,
    #[serde(rename = "f_name")]
    pub first_name: String,
    #[serde(rename = "m_name", default)]
    pub middle_name: String,
    #[serde(rename = "org", default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(rename = "w_phone", default, skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,
    #[serde(rename = "p_phone", default, skip_serializing_if = "Option::is_none")]
    pub personal_phone: Option<String>,
}

impl Record {
    pub fn new(id: RecordId, fields: RecordFields) -> Self {
        let mut record = Self {
            id,
            last_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            organization: None,
            work_phone: None,
            personal_phone: None,
        };
        record.apply(fields);
        record
    }

    /// Overwrites all six editable fields. The id is left untouched.
    pub fn apply(&mut self, fields: RecordFields) {
        self.last_name = fields.last_name;
        self.first_name = fields.first_name;
        self.middle_name = fields.middle_name;
        self.organization = fields.organization;
        self.work_phone = fields.work_phone;
        self.personal_phone = fields.personal_phone;
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            organization: self.organization.clone(),
            work_phone: self.work_phone.clone(),
            personal_phone: self.personal_phone.clone(),
        }
    }

    /// "Last First Middle", skipping empty parts.
    pub fn full_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.middle_name]
            .iter()
            .filter(|part| !part.is_empty())
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every present text field. The numeric id is not included.
    pub fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.last_name.as_str()),
            Some(self.first_name.as_str()),
            Some(self.middle_name.as_str()),
            self.organization.as_deref(),
            self.work_phone.as_deref(),
            self.personal_phone.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Case-insensitive substring match. `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.text_fields()
            .any(|value| value.to_lowercase().contains(needle))
    }
}
