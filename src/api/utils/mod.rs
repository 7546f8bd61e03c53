mod converter;
mod errors;
mod logger_bridge;
mod logger_config;

pub use converter::convert_c_str;
pub use errors::LoggerError;
pub use logger_bridge::{SkipListLogger, LOG4RS_HANDLE};
pub use logger_config::LoggerConfig;
