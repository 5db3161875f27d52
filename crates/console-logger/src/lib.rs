//! Console Logger
//!
//! `log` backend for WASM frontends. Writes timestamped lines to the browser
//! console on wasm32 (stderr elsewhere).

use std::sync::OnceLock;

use chrono::NaiveTime;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

/// Format a record as `[HH:MM:SS LEVEL target] message`
pub fn format_line(record: &Record, at: NaiveTime) -> String {
    format!(
        "[{} {:<5} {}] {}",
        at.format("%H:%M:%S"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_line(record, chrono::Local::now().time()));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let at = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        let line = format_line(
            &Record::builder()
                .args(format_args!("added {}", "Leche"))
                .level(Level::Warn)
                .target("shop::shortlist")
                .build(),
            at,
        );
        assert_eq!(line, "[09:05:07 WARN  shop::shortlist] added Leche");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("shop").build();
        let error = Metadata::builder().level(Level::Error).target("shop").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }
}
