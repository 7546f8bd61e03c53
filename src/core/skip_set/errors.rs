use thiserror::Error;

/// Reasons a serialized skip set could not be turned into a [`SkipSet`](super::SkipSet).
///
/// A decode error is never fatal for a query, callers degrade to the ambient score.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid base64 payload: '{0}'")]
    InvalidBase64(String),

    #[error("Unexpected end of input while reading {0}")]
    Truncated(&'static str),

    #[error("Unknown serialization cookie: {0}")]
    InvalidCookie(u32),

    #[error("Container count {0} exceeds the 65536 container limit")]
    TooManyContainers(u32),

    #[error("Container keys are not strictly ascending: {previous} followed by {current}")]
    UnsortedKeys { previous: u16, current: u16 },

    #[error("Array container with key {0} holds values that are not strictly ascending")]
    UnsortedArray(u16),

    #[error("Run container with key {0} holds overlapping or unsorted runs")]
    UnsortedRuns(u16),

    #[error("Run container with key {key} has a run starting at {start} that exceeds 65535")]
    RunOverflow { key: u16, start: u16 },
}

impl From<base64::DecodeError> for DecodeError {
    fn from(error: base64::DecodeError) -> Self {
        DecodeError::InvalidBase64(error.to_string())
    }
}
