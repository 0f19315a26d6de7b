use super::severity::Severity;
use chrono::{DateTime, Local};
use std::error::Error;
use std::thread;

/// A single log line before it is rendered. Built after the cutoff check
/// and dropped once written.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub thread: String,
    pub severity: Severity,
    pub source: &'a str,
    pub message: &'a str,
    pub error: Option<String>,
}

impl<'a> LogRecord<'a> {
    pub fn new(severity: Severity, source: &'a str, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            thread: current_thread_label(),
            severity,
            source,
            message,
            error: None,
        }
    }

    pub fn with_error(mut self, error: Option<&(dyn Error + 'static)>) -> Self {
        self.error = error.map(render_error);
        self
    }
}

/// The current thread's name, or its id when unnamed.
pub fn current_thread_label() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_string(),
        None => format!("{:?}", current.id()),
    }
}

/// Renders an error and its `source()` chain as `outer: inner: root`.
pub fn render_error(error: &(dyn Error + 'static)) -> String {
    let mut rendered = error.to_string();
    let mut cause = error.source();
    while let Some(err) = cause {
        rendered.push_str(": ");
        rendered.push_str(&err.to_string());
        cause = err.source();
    }
    rendered
}
