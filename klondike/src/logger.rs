use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Appends one line per record to a file. The terminal is in raw mode on the
/// alternate screen, so nothing may go to stdout or stderr.
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    fn level_prefix(level: Level) -> &'static str {
        match level {
            Level::Error => "[ERROR] ",
            Level::Warn => "[WARN ] ",
            Level::Info => "[INFO ] ",
            Level::Debug => "[DEBUG] ",
            Level::Trace => "[TRACE] ",
        }
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        let _ = file.write_all(Self::level_prefix(record.level()).as_bytes());
        if let Some(module) = record.module_path() {
            let _ = write!(file, "[{}] ", module);
        }
        let _ = writeln!(file, "{}", record.args());
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Installs the file logger as the global `log` backend.
pub fn init(path: &Path, level: LevelFilter) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
        level,
    }))?;
    log::set_max_level(level);
    Ok(())
}
