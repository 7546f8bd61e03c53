#[macro_export]
macro_rules! trace_sl {
    ($($arg:tt)+) => {
        log::trace!(target: $crate::constants::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug_sl {
    ($($arg:tt)+) => {
        log::debug!(target: $crate::constants::LOG_TARGET, $($arg)+)
    };
}

/// Log under the `skip_list` target, usable from other crates as well.
///
/// ```
/// skip_list_scoring::info_sl!("skip set decoded, values: {}", 3);
/// ```
#[macro_export]
macro_rules! info_sl {
    ($($arg:tt)+) => {
        log::info!(target: $crate::constants::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn_sl {
    ($($arg:tt)+) => {
        log::warn!(target: $crate::constants::LOG_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error_sl {
    ($($arg:tt)+) => {
        log::error!(target: $crate::constants::LOG_TARGET, $($arg)+)
    };
}
