//! Call-site sugar that makes the message the receiver:
//!
//! ```
//! use log2::logger::*;
//!
//! let log = Log::new();
//! "cache warmed".logok(&log, module_path!());
//! ```

use super::logger::Log;
use super::severity::Severity;
use std::error::Error;

pub trait LogExt {
    /// Logs `self` at `severity` with an attached error.
    fn log_err(&self, log: &Log, severity: Severity, source: &str, error: &(dyn Error + 'static));

    fn log_at(&self, log: &Log, severity: Severity, source: &str);

    fn logv(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Verbose, source);
    }

    fn logd(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Debug, source);
    }

    fn logi(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Info, source);
    }

    fn logok(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Ok, source);
    }

    fn logg(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Good, source);
    }

    fn loga(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Alert, source);
    }

    fn logw(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Warning, source);
    }

    fn loge(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Error, source);
    }

    fn logf(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Fatal, source);
    }

    fn logs(&self, log: &Log, source: &str) {
        self.log_at(log, Severity::Silent, source);
    }
}

impl<T: AsRef<str> + ?Sized> LogExt for T {
    fn log_err(&self, log: &Log, severity: Severity, source: &str, error: &(dyn Error + 'static)) {
        log.log(severity, source, self.as_ref(), Some(error));
    }

    fn log_at(&self, log: &Log, severity: Severity, source: &str) {
        log.log(severity, source, self.as_ref(), None);
    }
}
