mod cache;
mod ffi_logger_setup;
mod ffi_script_manager;
mod implements;
mod utils;

pub use ffi_logger_setup::skip_list_log4rs_initialize;
pub use ffi_script_manager::{
    ffi_skip_list_compile, ffi_skip_list_free, ffi_skip_list_load_config,
    ffi_skip_list_needs_score, ffi_skip_list_score,
};
pub use utils::{LoggerConfig, LoggerError};
