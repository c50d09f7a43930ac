use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Invalid input: expected a record, got {0}")]
    InvalidInput(&'static str),

    #[error("Invalid attribute: {0} (expected one of mutable-value, enumerable, reconfigurable)")]
    InvalidAttribute(String),

    #[error("Cannot assign to read-only key: {0}")]
    ReadOnly(String),

    #[error("Cannot add key {0}: record is not extensible")]
    NotExtensible(String),

    #[error("Cannot redefine or delete non-configurable key: {0}")]
    NotConfigurable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl RecordError {
    /// True for errors raised by a record refusing a mutation.
    pub fn is_violation(&self) -> bool {
        matches!(
            self,
            RecordError::ReadOnly(_)
                | RecordError::NotExtensible(_)
                | RecordError::NotConfigurable(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
