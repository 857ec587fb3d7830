//! Console Logger
//!
//! A `log` backend for browser apps. Records go to `console.error`,
//! `console.warn`, `console.info` or `console.debug` depending on level.
//! Off wasm32 (unit tests) records go to stderr instead.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger writing `[target] message` lines to the console
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        write_line(record.level(), line);
    }

    fn flush(&self) {}
}

/// Install the console logger with the given max level.
///
/// Safe to call more than once: later calls only adjust the level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Err(err) = log::set_logger(&LOGGER) {
        // Someone else's logger is installed; leave it alone.
        if !is_installed() {
            return Err(err);
        }
    }
    log::set_max_level(level);
    Ok(())
}

fn is_installed() -> bool {
    let installed = log::logger() as *const dyn Log as *const ();
    installed == &LOGGER as *const ConsoleLogger as *const ()
}

/// Format a record as a single console line
pub fn format_line(target: &str, message: &str) -> String {
    format!("[{}] {}", target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: String) {
    let value = wasm_bindgen::JsValue::from(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: String) {
    eprintln!("{:<5} {}", level, line);
}
