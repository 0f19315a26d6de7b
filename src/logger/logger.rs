use super::format::{ColourMode, LineFormatter};
use super::record::LogRecord;
use super::severity::Severity;
use super::sink::{LogSink, StdoutSink};
use dashmap::DashMap;
use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Source name the façade uses for its own records.
pub const SELF_SOURCE: &str = env!("CARGO_PKG_NAME");

/// Cutoff and colour settings shared by a `Log` and its loggers.
#[derive(Debug)]
pub struct LogConfig {
    priority: AtomicUsize,
    short_colours: AtomicBool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Severity::Verbose, ColourMode::Short)
    }
}

impl LogConfig {
    pub fn new(cutoff: Severity, mode: ColourMode) -> Self {
        Self {
            priority: AtomicUsize::new(cutoff.rank()),
            short_colours: AtomicBool::new(mode == ColourMode::Short),
        }
    }

    pub fn cutoff(&self) -> Severity {
        Severity::from_rank(self.priority.load(Ordering::Relaxed)).unwrap_or(Severity::Verbose)
    }

    pub fn set_cutoff(&self, cutoff: Severity) {
        self.priority.store(cutoff.rank(), Ordering::Relaxed);
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.cutoff()
    }

    pub fn colour_mode(&self) -> ColourMode {
        if self.short_colours.load(Ordering::Relaxed) {
            ColourMode::Short
        } else {
            ColourMode::Long
        }
    }

    pub fn set_colour_mode(&self, mode: ColourMode) {
        self.short_colours
            .store(mode == ColourMode::Short, Ordering::Relaxed);
    }
}

/// A logger bound to one source name.
pub struct SourceLogger {
    source: Arc<str>,
    config: Arc<LogConfig>,
    sink: Arc<dyn LogSink>,
}

impl SourceLogger {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Writes one record. The cutoff is checked by the caller.
    pub fn log(&self, severity: Severity, message: &str, error: Option<&(dyn Error + 'static)>) {
        let record = LogRecord::new(severity, &self.source, message).with_error(error);
        let formatter = LineFormatter::new(self.config.colour_mode());
        self.sink.emit(&record, &formatter);
    }
}

macro_rules! severity_methods {
    ($($(#[$doc:meta])* $name:ident, $name_err:ident => $severity:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self, source: &str, message: &str) {
                self.log($severity, source, message, None);
            }

            pub fn $name_err(&self, source: &str, message: &str, error: &(dyn Error + 'static)) {
                self.log($severity, source, message, Some(error));
            }
        )*
    };
}

/// The logging façade.
///
/// Construct one at startup and hand out references. Every record below the
/// cutoff is dropped before it is formatted; everything else goes to the
/// logger cached for its source.
pub struct Log {
    config: Arc<LogConfig>,
    sink: Arc<dyn LogSink>,
    loggers: DashMap<String, Arc<SourceLogger>>,
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl Log {
    /// Logs to standard output with the most verbose cutoff.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self::with_config(Arc::new(LogConfig::default()), sink)
    }

    pub fn with_config(config: Arc<LogConfig>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            config,
            sink,
            loggers: DashMap::new(),
        }
    }

    pub fn config(&self) -> &Arc<LogConfig> {
        &self.config
    }

    pub fn log(
        &self,
        severity: Severity,
        source: &str,
        message: &str,
        error: Option<&(dyn Error + 'static)>,
    ) {
        if !self.config.enabled(severity) {
            return;
        }
        self.logger(source).log(severity, message, error);
    }

    severity_methods! {
        verbose, verbose_err => Severity::Verbose;
        debug, debug_err => Severity::Debug;
        info, info_err => Severity::Info;
        /// Something is working.
        ok, ok_err => Severity::Ok;
        /// A task completed correctly or something went as expected.
        good, good_err => Severity::Good;
        /// Highlights something for the user.
        alert, alert_err => Severity::Alert;
        warning, warning_err => Severity::Warning;
        error, error_err => Severity::Error;
        /// Critical failure that cannot be recovered from.
        fatal, fatal_err => Severity::Fatal;
        /// Always shown.
        silent, silent_err => Severity::Silent;
    }

    /// Returns the logger for `source`, creating it on first use.
    pub fn logger(&self, source: &str) -> Arc<SourceLogger> {
        if let Some(logger) = self.loggers.get(source) {
            return Arc::clone(logger.value());
        }
        let logger = self
            .loggers
            .entry(source.to_string())
            .or_insert_with(|| {
                Arc::new(SourceLogger {
                    source: Arc::from(source),
                    config: Arc::clone(&self.config),
                    sink: Arc::clone(&self.sink),
                })
            });
        Arc::clone(logger.value())
    }

    pub fn cached_sources(&self) -> usize {
        self.loggers.len()
    }

    /// Sets the cutoff rank, clamped to the valid range.
    pub fn set_priority_level(&self, level: i32) {
        let cutoff = Severity::clamped(level);
        self.config.set_cutoff(cutoff);
        self.info(
            SELF_SOURCE,
            &format!("Log priority cutoff set to {}", cutoff.rank()),
        );
    }

    pub fn priority_level(&self) -> usize {
        self.config.cutoff().rank()
    }

    pub fn cutoff(&self) -> Severity {
        self.config.cutoff()
    }

    /// Sets the cutoff by severity name. Unknown names are ignored.
    pub fn set_priority(&self, name: &str) {
        if let Some(severity) = Severity::from_name(name) {
            self.set_priority_level(severity.rank() as i32);
        }
    }

    pub fn priority(&self) -> &'static str {
        self.config.cutoff().name()
    }

    pub fn names(&self) -> [&'static str; 10] {
        Severity::names()
    }

    pub fn set_short_colours(&self, short: bool) {
        let mode = if short {
            ColourMode::Short
        } else {
            ColourMode::Long
        };
        self.config.set_colour_mode(mode);
    }

    pub fn short_colours(&self) -> bool {
        self.config.colour_mode() == ColourMode::Short
    }
}
