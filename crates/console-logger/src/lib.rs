//! Console Logger
//!
//! `log` backend for the frontend. Records go to the browser console on
//! wasm32 (stderr elsewhere) and the most recent formatted lines are kept in
//! a fixed-size rolling buffer that the page shows in its debug log panel.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Lines kept by [`recent_lines`]
pub const DEFAULT_CAPACITY: usize = 200;

/// Bounded buffer of formatted log lines, oldest dropped first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
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

struct ConsoleLogger {
    buffer: Mutex<RollingBuffer>,
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Format one record, e.g. `12:00:01.234 INFO  [APP] Mounted`
pub fn format_line(timestamp: &str, level: Level, message: &str) -> String {
    format!("{} {:<5} {}", timestamp, level, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), &record.args().to_string());
        write_out(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_out(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_out(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger with the given level.
///
/// Calling it again only changes the level.
pub fn init_logger(level: LevelFilter) -> Result<(), String> {
    let mut fresh = false;
    let logger = LOGGER.get_or_init(|| {
        fresh = true;
        ConsoleLogger {
            buffer: Mutex::new(RollingBuffer::new(DEFAULT_CAPACITY)),
        }
    });
    if fresh {
        log::set_logger(logger).map_err(|e| format!("failed to install logger: {}", e))?;
    }
    log::set_max_level(level);
    Ok(())
}

/// Most recent log lines, oldest first. Empty before [`init_logger`].
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = RollingBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push("a".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line("12:00:01.234", Level::Info, "[APP] Mounted"),
            "12:00:01.234 INFO  [APP] Mounted"
        );
    }

    #[test]
    fn test_init_and_capture() {
        init_logger(LevelFilter::Debug).unwrap();
        init_logger(LevelFilter::Debug).unwrap();
        log::info!("[TEST] captured line");
        assert!(recent_lines().iter().any(|line| line.ends_with("[TEST] captured line")));
    }
}
