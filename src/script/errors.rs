use thiserror::Error;

/// A script was configured without one of its required parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing parameter [{0}]")]
    MissingParameter(&'static str),

    #[error("Script parameters must be a JSON object: '{0}'")]
    InvalidParameters(String),
}

/// The engine was asked to compile something it doesn't provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("{engine} scripts cannot be used for context [{context}]")]
    UnsupportedContext { engine: &'static str, context: &'static str },

    #[error("Unknown script name {0}")]
    UnknownScript(String),
}
