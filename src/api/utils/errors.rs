use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Unsupported log level: '{0}'")]
    InvalidLevel(String),

    #[error("Invalid log4rs config: '{0}'")]
    Config(String),

    #[error("Failed to open log file: '{0}'")]
    IoError(#[from] std::io::Error),

    #[error("A thread holding the logger handle panicked and poisoned the lock")]
    Poisoned,
}
