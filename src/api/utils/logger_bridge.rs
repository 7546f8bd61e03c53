use std::sync::Mutex;

use log4rs::config::Config;
use log4rs::Handle;
use once_cell::sync::Lazy;

use super::LoggerError;

/// Handle of the installed log4rs logger, `None` until the first initialization.
pub static LOG4RS_HANDLE: Lazy<Mutex<Option<Handle>>> = Lazy::new(|| Mutex::new(None));

pub struct SkipListLogger;

impl SkipListLogger {
    /// Install `config` as the global logger, or swap it in when a logger is already installed.
    pub fn update_log4rs_handler(
        handle: &Mutex<Option<Handle>>,
        config: Config,
    ) -> Result<(), LoggerError> {
        let mut guard = handle.lock().map_err(|_| LoggerError::Poisoned)?;
        match guard.as_ref() {
            Some(installed) => installed.set_config(config),
            None => {
                let installed = log4rs::init_config(config)
                    .map_err(|e| LoggerError::Config(e.to_string()))?;
                *guard = Some(installed);
            }
        }
        Ok(())
    }
}
