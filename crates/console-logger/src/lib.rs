//! Console Logger
//!
//! `log` backend that forwards records to the browser console, picking the
//! console method that matches the record level so devtools filtering works.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => console::error_1(&value),
            Level::Warn => console::warn_1(&value),
            Level::Info => console::info_1(&value),
            Level::Debug => console::log_1(&value),
            Level::Trace => console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name such as `"debug"`, falling back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Drop the crate prefix from a module path target.
pub fn short_target(target: &str) -> &str {
    match target.split_once("::") {
        Some((_, rest)) => rest,
        None => target,
    }
}

pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("{:<5} [{}] {}", level, short_target(target), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_target_strips_crate_name() {
        assert_eq!(short_target("clinic_admin_ui::api::users"), "api::users");
        assert_eq!(short_target("clinic_admin_ui"), "clinic_admin_ui");
    }

    #[test]
    fn test_format_line_pads_level() {
        let line = format_line(Level::Info, "clinic_admin_ui::app", "Loaded 3 users");
        assert_eq!(line, "INFO  [app] Loaded 3 users");

        let line = format_line(Level::Error, "clinic_admin_ui::api", "boom");
        assert_eq!(line, "ERROR [api] boom");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
    }
}
