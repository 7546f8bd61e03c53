use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::common::constants::LOG_TARGET;

use super::LoggerError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l})} [{T}] {t} - {m}{n}";
const LOG_FILE_NAME: &str = "skip_list.log";
const LOG_ROLL_PATTERN: &str = "skip_list.{}.log";
const LOG_FILE_SIZE: u64 = 100 * 1024 * 1024;
const LOG_FILE_COUNT: u32 = 5;

const FILE_APPENDER: &str = "file";
const CONSOLE_APPENDER: &str = "console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_directory: String,
    pub log_level: String,
    pub log_in_file: bool,
    pub console_display: bool,
    pub only_record_skip_list: bool,
}

impl LoggerConfig {
    pub fn new(
        log_directory: String,
        log_level: String,
        log_in_file: bool,
        console_display: bool,
        only_record_skip_list: bool,
    ) -> Self {
        Self { log_directory, log_level, log_in_file, console_display, only_record_skip_list }
    }

    pub fn level(&self) -> Result<LevelFilter, LoggerError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| LoggerError::InvalidLevel(self.log_level.clone()))
    }

    pub fn build_logger_config(&self) -> Result<Config, LoggerError> {
        let level = self.level()?;
        let mut builder = Config::builder();
        let mut appenders: Vec<&str> = Vec::new();

        if self.log_in_file {
            let directory = Path::new(&self.log_directory);
            let roll_pattern = directory.join(LOG_ROLL_PATTERN);
            let roller = FixedWindowRoller::builder()
                .base(1)
                .build(&roll_pattern.to_string_lossy(), LOG_FILE_COUNT)
                .map_err(|e| LoggerError::Config(e.to_string()))?;
            let policy =
                CompoundPolicy::new(Box::new(SizeTrigger::new(LOG_FILE_SIZE)), Box::new(roller));
            let file = RollingFileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(directory.join(LOG_FILE_NAME), Box::new(policy))?;
            builder = builder.appender(Appender::builder().build(FILE_APPENDER, Box::new(file)));
            appenders.push(FILE_APPENDER);
        }

        if self.console_display {
            let console = ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build();
            builder =
                builder.appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(console)));
            appenders.push(CONSOLE_APPENDER);
        }

        let root = if self.only_record_skip_list {
            builder = builder.logger(
                Logger::builder().appenders(appenders).additive(false).build(LOG_TARGET, level),
            );
            Root::builder().build(LevelFilter::Off)
        } else {
            Root::builder().appenders(appenders).build(level)
        };

        builder.build(root).map_err(|e| LoggerError::Config(e.to_string()))
    }
}
