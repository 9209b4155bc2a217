//! Custom logging module.
//!
//! This module provides a logger that formats records and forwards them to a
//! bounded in-memory buffer the log panel renders from. Nothing is written
//! to stdout, which belongs to the terminal UI.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Number of log lines kept for the log panel.
///
pub const LOG_CAPACITY: usize = 500;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Shared ring of formatted log lines.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    /// Append a line, dropping the oldest once full.
    ///
    pub fn push(&self, line: String) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == LOG_CAPACITY {
                entries.pop_front();
            }
            entries.push_back(line);
        }
    }

    /// Return the last `count` lines, oldest first.
    ///
    pub fn tail(&self, count: usize) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries
                .iter()
                .skip(entries.len().saturating_sub(count))
                .cloned()
                .collect(),
            Err(_) => vec![],
        }
    }
}

/// Custom logger that captures logs to state
///
pub struct CustomLogger {
    level: LevelFilter,
    log_callback: Arc<Mutex<Option<Box<dyn Fn(String) + Send + Sync>>>>,
}

impl CustomLogger {
    pub fn new(level: LevelFilter) -> Self {
        CustomLogger {
            level,
            log_callback: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_log_callback(&self, callback: Box<dyn Fn(String) + Send + Sync>) {
        if let Ok(mut guard) = self.log_callback.lock() {
            *guard = Some(callback);
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(callback) = self.log_callback.lock() {
                if let Some(ref cb) = *callback {
                    cb(format_log(record));
                }
            }
        }
    }

    fn flush(&self) {}
}

/// Install the logger globally, forwarding every line into the buffer.
///
pub fn init(level: LevelFilter, buffer: LogBuffer) -> AppResult<()> {
    let logger = CustomLogger::new(level);
    logger.set_log_callback(Box::new(move |line| buffer.push(line)));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
