//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a bounded ring buffer
//! and mirrors every line to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

#[derive(Debug, Clone, Copy)]
pub struct LoggerConfig {
    /// Maximum number of lines kept in memory
    pub capacity: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            level: LevelFilter::Info,
        }
    }
}

/// Fixed-capacity line buffer; the oldest line is dropped first
#[derive(Debug)]
pub struct RingBuffer {
    capacity: usize,
    lines: VecDeque<String>,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// "<timestamp> [LEVEL] target: message"
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!(
        "{} [{}] {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if called twice.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    let logger = RollingLogger {
        level: config.level,
        buffer: Mutex::new(RingBuffer::new(config.capacity)),
    };
    LOGGER.set(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    let installed = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::set_logger(installed).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(config.level);
    Ok(())
}

/// Buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}
