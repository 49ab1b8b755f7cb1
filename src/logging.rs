#![cfg(feature = "std")]

use std::env;
use std::fmt;
use log::{self, Level, LevelFilter, Metadata, Record};

use crate::config::LOG_ENV;

/// Writes `[LEVEL target] message` lines to stderr so stdout stays free for
/// boards and JSON.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record.level(), record.target(), record.args()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// One log line. The crate prefix is dropped from module targets, so a
/// record from `battleships::placement` shows as `placement`.
pub fn format_line(level: Level, target: &str, args: impl fmt::Display) -> String {
    let target = target
        .strip_prefix("battleships::")
        .unwrap_or(target);
    format!("[{:<5} {}] {}", level, target, args)
}

/// Parse a level name, falling back to `info` for anything unrecognised.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger at the level named by `BATTLESHIP_LOG`.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
