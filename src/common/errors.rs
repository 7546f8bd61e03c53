use std::{io, sync::Arc};

use thiserror::Error;

use crate::api::LoggerError;
use crate::core::{DecodeError, FieldReadError};
use crate::script::{ConfigurationError, ScriptError};

/// The library's error enum
#[derive(Debug, Error)]
pub enum SkipListError {
    /// IO Error.
    #[error("An IO error occurred: '{0}'")]
    IoError(Arc<io::Error>),

    /// Required script parameter is absent.
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),

    /// Script can't be compiled by this engine.
    #[error(transparent)]
    ScriptError(#[from] ScriptError),

    #[error("'{0}'")]
    DecodeError(#[from] DecodeError),

    #[error("'{0}'")]
    FieldReadError(#[from] FieldReadError),

    #[error("Failed to setup logger: '{0}'")]
    LoggerError(#[from] LoggerError),

    /// Invalid argument was passed by the user.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),

    #[error("'{0}'")]
    Error(String),
}

impl From<io::Error> for SkipListError {
    fn from(io_err: io::Error) -> SkipListError {
        SkipListError::IoError(Arc::new(io_err))
    }
}

impl From<serde_json::Error> for SkipListError {
    fn from(serde_error: serde_json::Error) -> SkipListError {
        SkipListError::InvalidArgument(serde_error.to_string())
    }
}

impl From<String> for SkipListError {
    fn from(value: String) -> Self {
        SkipListError::Error(value)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::SkipListError;
    use crate::core::DecodeError;
    use crate::script::ConfigurationError;

    #[test]
    fn test_error_messages() {
        let error: SkipListError = ConfigurationError::MissingParameter("data").into();
        assert_eq!(error.to_string(), "Missing parameter [data]");

        let error: SkipListError = DecodeError::InvalidCookie(7).into();
        assert_eq!(error.to_string(), "'Unknown serialization cookie: 7'");

        let error: SkipListError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(error, SkipListError::IoError(_)));

        let error: SkipListError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(error, SkipListError::InvalidArgument(_)));
    }
}
