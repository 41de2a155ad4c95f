/// Logger that captures records into a memory buffer instead of stdout so they
/// never corrupt the TUI display. The Logs tab reads from the same buffer.
use leavecal_core::get_leavecal_setting;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

const MAX_LOG_LINES: usize = 10_000;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp, self.level, self.target, self.message
        )
    }
}

/// Thread-safe ring of the most recent log entries
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<RwLock<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(VecDeque::with_capacity(256))),
        }
    }

    pub fn add_log(&self, entry: LogEntry) {
        let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
        if logs.len() >= MAX_LOG_LINES {
            logs.pop_front();
        }
        logs.push_back(entry);
    }

    pub fn get_logs(&self) -> Vec<String> {
        self.logs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(LogEntry::format)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

pub struct BufferedLogger {
    buffer: LogBuffer,
    level: LevelFilter,
}

impl BufferedLogger {
    pub fn new(buffer: LogBuffer, level: LevelFilter) -> Self {
        Self { buffer, level }
    }
}

impl log::Log for BufferedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.add_log(LogEntry {
                timestamp: chrono::Local::now()
                    .format("%Y-%m-%d %H:%M:%S%.3f")
                    .to_string(),
                level: record.level().to_string(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            });
        }
    }

    fn flush(&self) {}
}

/// Install the buffered logger at `LEAVECAL_LOG_LEVEL` and return the buffer
pub fn init_memory_logger() -> Result<LogBuffer, SetLoggerError> {
    let level_setting = get_leavecal_setting!(LEAVECAL_LOG_LEVEL);
    let level = LevelFilter::from_str(&level_setting).unwrap_or(LevelFilter::Info);

    let buffer = LogBuffer::new();
    log::set_boxed_logger(Box::new(BufferedLogger::new(buffer.clone(), level)))?;
    log::set_max_level(level);
    Ok(buffer)
}
