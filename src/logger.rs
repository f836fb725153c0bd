//! Terminal logger for `no_std` targets.
//!
//! The logger owns no I/O. It is handed a function that writes a finished line
//! and a function that reports time since boot, so the same logger works over
//! the brain's serial port or a host test harness.

use alloc::{format, string::String};
use core::time::Duration;

use log::{max_level, set_logger, set_max_level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const ESCAPES: [Option<&str>; 6] = [
    None,             // Default foreground
    Some("\x1B[31m"), // Error (red)
    Some("\x1B[33m"), // Warn (yellow)
    Some("\x1B[34m"), // Info (blue)
    Some("\x1B[36m"), // Debug (cyan)
    Some("\x1B[37m"), // Trace (white)
];

pub struct SerialLogger {
    write: fn(&str),
    clock: fn() -> Duration,
}

impl SerialLogger {
    pub const fn new(write: fn(&str), clock: fn() -> Duration) -> Self {
        Self { write, clock }
    }

    pub fn init(&'static self, level: LevelFilter) -> Result<(), SetLoggerError> {
        set_logger(self)?;
        set_max_level(level);

        Ok(())
    }
}

/// `MM:SS:mmm [LEVEL] message`, with the level coloured.
pub fn format_record(timestamp: Duration, record: &Record<'_>) -> String {
    let mins = timestamp.as_secs() / 60;
    let submin_secs = timestamp.as_secs() % 60;

    format!(
        "{:02}:{:02}:{:03} {}[{}]\x1B[0m {}",
        mins,
        submin_secs,
        timestamp.subsec_millis(),
        ESCAPES[record.level() as usize].unwrap_or_default(),
        record.level(),
        record.args()
    )
}

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            (self.write)(&format_record((self.clock)(), record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn test_format_record() {
        let line = format_record(
            Duration::from_millis(125_042),
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("zero rotation"))
                .build(),
        );
        assert_eq!(line, "02:05:042 \x1B[33m[WARN]\x1B[0m zero rotation");
    }

    #[test]
    fn test_every_level_has_a_colour() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace] {
            assert!(ESCAPES[level as usize].is_some());
        }
    }
}
