use super::format::LineFormatter;
use super::record::LogRecord;
use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for records that passed the cutoff.
pub trait LogSink: Send + Sync {
    fn emit(&self, record: &LogRecord<'_>, formatter: &LineFormatter);
}

/// Writes each line to standard output under the stdout lock so lines from
/// different threads never interleave. Write failures are dropped; logging
/// never reports an error to its caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, record: &LogRecord<'_>, formatter: &LineFormatter) {
        let mut line = formatter.format(record);
        line.push('\n');
        let mut out = io::stdout().lock();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

/// Keeps formatted lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        match self.lines.lock() {
            Ok(mut lines) => lines.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: &LogRecord<'_>, formatter: &LineFormatter) {
        let line = formatter.format(record);
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}
