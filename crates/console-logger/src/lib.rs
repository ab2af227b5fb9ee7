//! Console Logger
//!
//! `log` facade backend for the browser console.
//! Keeps the most recent formatted lines in a circular buffer, readable
//! through [`recent_lines`].

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines retained by the global logger
pub const DEFAULT_CAPACITY: usize = 200;

/// Fixed-capacity line buffer, oldest line evicted first
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines in arrival order
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

/// Logger writing to `console.*` (stderr off-wasm)
pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buf| buf.lines())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let line = format_line(&time, record.level(), record.target(), record.args());
        write_console(record.level(), &line);

        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(line);
        }
    }

    fn flush(&self) {}
}

/// `HH:MM:SS LEVEL [target] message`
pub fn format_line(time: &str, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!("{} {:<5} [{}] {}", time, level, target, args)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;

    let msg = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug => web_sys::console::debug_1(&msg),
        Level::Trace => web_sys::console::log_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger.
///
/// Only the first call takes effect; later calls return the `SetLoggerError`
/// from the `log` crate.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent lines from the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .map(|logger| logger.recent_lines())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buf = RingBuffer::new(3);
        for i in 0..5 {
            buf.push(format!("line {}", i));
        }

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_ring_buffer_zero_capacity() {
        let mut buf = RingBuffer::new(0);
        buf.push("dropped".to_string());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_format_line() {
        let line = format_line("12:00:01", Level::Warn, "folio_ui::api", &format_args!("HTTP {}", 500));
        assert_eq!(line, "12:00:01 WARN  [folio_ui::api] HTTP 500");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("test")
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .target("test")
                .args(format_args!("fetch failed"))
                .build(),
        );

        let lines = logger.recent_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR [test] fetch failed"));
    }
}
