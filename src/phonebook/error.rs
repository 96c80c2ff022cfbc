use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("No record with id {0}")]
    NotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// True when the durable store could not be read or written.
    ///
    /// After a failed save the in-memory store keeps the mutation, so the two
    /// may disagree until the next successful save.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            PhonebookError::Io(_) | PhonebookError::Serialization(_) | PhonebookError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_persistence_failures() {
        let io = PhonebookError::Io(std::io::Error::other("disk full"));
        assert!(io.is_persistence_failure());
        assert!(PhonebookError::Store("duplicate id 3".into()).is_persistence_failure());
        assert!(!PhonebookError::NotFound(7).is_persistence_failure());
        assert!(!PhonebookError::InvalidInput("page 0".into()).is_persistence_failure());
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(PhonebookError::NotFound(42).to_string(), "No record with id 42");
    }
}
