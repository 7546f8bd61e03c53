use thiserror::Error;

/// A document's field could not be read as a single integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldReadError {
    #[error("Field [{0}] does not exist in document")]
    Missing(String),

    #[error("Field [{0}] has no value")]
    Empty(String),

    #[error("Field [{field}] holds {found} values, not integers")]
    NotInteger { field: String, found: &'static str },
}
