use crate::common::types::LogLevel;

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

const MODE_DISABLED: u8 = 0;
const MODE_STDERR: u8 = 1;

pub struct GeneratorLogger {
    mode: AtomicU8,
    level: AtomicU8,
}

impl GeneratorLogger {
    const fn new() -> Self {
        Self {
            mode: AtomicU8::new(MODE_DISABLED),
            level: AtomicU8::new(LogLevel::Off as u8),
        }
    }

    fn level(&self) -> Option<Level> {
        level_from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
        log::set_max_level(level_filter_from_u8(level as u8));
    }

    fn set_mode(&self, mode: u8) {
        self.mode.store(mode, Ordering::Relaxed);
    }
}

impl Log for GeneratorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let Some(level) = self.level() else {
            return false;
        };
        metadata.level() <= level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if self.mode.load(Ordering::Relaxed) == MODE_STDERR {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{}][{}] {}",
                env!("CARGO_PKG_NAME"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: GeneratorLogger = GeneratorLogger::new();
static LOGGER_STATE: OnceLock<LoggerInstall> = OnceLock::new();

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum LoggerInstall {
    Installed,
    /// Another logger owns the `log` facade; only the max level is adjusted.
    External,
}

fn init_logger() -> LoggerInstall {
    *LOGGER_STATE.get_or_init(|| match log::set_logger(&LOGGER) {
        Ok(()) => {
            log::set_max_level(LevelFilter::Off);
            LoggerInstall::Installed
        }
        Err(_) => LoggerInstall::External,
    })
}

fn level_filter_from_u8(level: u8) -> LevelFilter {
    match level {
        x if x == LogLevel::Error as u8 => LevelFilter::Error,
        x if x == LogLevel::Warn as u8 => LevelFilter::Warn,
        x if x == LogLevel::Info as u8 => LevelFilter::Info,
        x if x == LogLevel::Debug as u8 => LevelFilter::Debug,
        x if x == LogLevel::Trace as u8 => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

fn level_from_u8(level: u8) -> Option<Level> {
    match level {
        x if x == LogLevel::Error as u8 => Some(Level::Error),
        x if x == LogLevel::Warn as u8 => Some(Level::Warn),
        x if x == LogLevel::Info as u8 => Some(Level::Info),
        x if x == LogLevel::Debug as u8 => Some(Level::Debug),
        x if x == LogLevel::Trace as u8 => Some(Level::Trace),
        _ => None,
    }
}

/// Routes `log` records at or above `level` to stderr.
pub fn log_set_stderr(level: LogLevel) {
    match init_logger() {
        LoggerInstall::Installed => {
            LOGGER.set_mode(MODE_STDERR);
            LOGGER.set_level(level);
        }
        LoggerInstall::External => log::set_max_level(level_filter_from_u8(level as u8)),
    }
}

pub fn log_disable() {
    match init_logger() {
        LoggerInstall::Installed => {
            LOGGER.set_mode(MODE_DISABLED);
            LOGGER.set_level(LogLevel::Off);
        }
        LoggerInstall::External => log::set_max_level(LevelFilter::Off),
    }
}
