use std::ffi::c_char;

use crate::error_sl;

use super::utils::{convert_c_str, LoggerConfig, SkipListLogger, LOG4RS_HANDLE};

/// Initializes the logger configuration for the skip_list lib.
///
/// Arguments:
/// - `log_directory`: The directory where log files are saved.
/// - `log_level`: The logging level to use. Supported levels: off, error, warn, info, debug, trace.
/// - `log_in_file`: Whether record log content in file.
/// - `console_display`: Enables logging to the console if set to true.
/// - `only_record_skip_list`: Only record `target=skip_list` log content.
///
/// Returns:
/// - `true` if the logger is successfully initialized, `false` otherwise.
///
/// # Safety
/// `log_directory` and `log_level` must be null or valid nul terminated strings.
#[no_mangle]
pub unsafe extern "C" fn skip_list_log4rs_initialize(
    log_directory: *const c_char,
    log_level: *const c_char,
    log_in_file: bool,
    console_display: bool,
    only_record_skip_list: bool,
) -> bool {
    let log_directory = match convert_c_str(log_directory, "log_directory") {
        Ok(directory) => directory,
        Err(e) => {
            error_sl!("{}", e);
            return false;
        }
    };
    let log_level = match convert_c_str(log_level, "log_level") {
        Ok(level) => level,
        Err(e) => {
            error_sl!("{}", e);
            return false;
        }
    };

    let logger_config = LoggerConfig::new(
        log_directory,
        log_level,
        log_in_file,
        console_display,
        only_record_skip_list,
    );
    let config = match logger_config.build_logger_config() {
        Ok(config) => config,
        Err(e) => {
            error_sl!("{:?}", e);
            return false;
        }
    };
    match SkipListLogger::update_log4rs_handler(&LOG4RS_HANDLE, config) {
        Ok(_) => true,
        Err(e) => {
            error_sl!("{:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::skip_list_log4rs_initialize;

    #[test]
    fn test_initialize_rejects_bad_arguments() {
        let level = CString::new("info").expect("CString");
        assert!(!unsafe {
            skip_list_log4rs_initialize(std::ptr::null(), level.as_ptr(), false, true, true)
        });

        let directory = CString::new("/tmp").expect("CString");
        let bad_level = CString::new("loud").expect("CString");
        assert!(!unsafe {
            skip_list_log4rs_initialize(directory.as_ptr(), bad_level.as_ptr(), false, true, true)
        });
    }
}
