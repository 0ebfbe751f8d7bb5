use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::{Error, Result};

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

static MY_LOGGER: MyLogger = MyLogger;
struct MyLogger;
impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}\n",
            record.target(),
            record.level(),
            record.args()
        );

        let Ok(mut guard) = LOG_FILE.lock() else {
            return;
        };
        match guard.as_mut() {
            Some(file) => _ = file.write_all(line.as_bytes()),
            None => _ = io::stderr().write_all(line.as_bytes()),
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            match guard.as_mut() {
                Some(file) => _ = file.flush(),
                None => _ = io::stderr().flush(),
            }
        }
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

/// Install the crate logger. Records go to `file` (appended) when given,
/// otherwise to stderr.
pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let file = match file {
        Some(path) => Some(OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::Io(format!("Opening log file {} error: {}", path, e))
            })?
        ),
        None => None,
    };

    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = file;
    }

    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn teardown() {
    log::set_max_level(LevelFilter::Off);
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = None;
    }
    _ = log::set_logger(&NULL_LOGGER);
}
