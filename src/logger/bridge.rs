//! Delegation onto `tracing`.
//!
//! `TracingSink` turns façade records into `tracing` events and `LineFormat`
//! renders any `tracing` event in the façade's line layout, so records from
//! this crate and from dependencies share one output.

use super::error::LogError;
use super::format::LineFormatter;
use super::logger::LogConfig;
use super::record::LogRecord;
use super::severity::Severity;
use super::sink::LogSink;
use std::fmt::{self, Write as _};
use std::io;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::{FmtContext, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{
    EnvFilter, Registry, fmt as tracing_fmt, layer::SubscriberExt, reload,
    util::SubscriberInitExt,
};

/// Target of every event emitted by `TracingSink`.
pub const TARGET: &str = env!("CARGO_PKG_NAME");

macro_rules! forward {
    ($macro:ident, $record:expr) => {
        tracing::$macro!(
            target: TARGET,
            severity = $record.severity.name(),
            source = $record.source,
            error = $record.error.as_deref(),
            "{}",
            $record.message
        )
    };
}

/// Forwards records to the current `tracing` dispatcher.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: &LogRecord<'_>, _formatter: &LineFormatter) {
        match record.severity.level() {
            Level::TRACE => forward!(trace, record),
            Level::DEBUG => forward!(debug, record),
            Level::INFO => forward!(info, record),
            Level::WARN => forward!(warn, record),
            _ => forward!(error, record),
        }
    }
}

#[derive(Default)]
struct EventFields {
    /// Set for events emitted by `TracingSink`; only those carry façade fields.
    own: bool,
    severity: Option<String>,
    source: Option<String>,
    error: Option<String>,
    message: String,
    extra: String,
}

impl EventFields {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = value,
            "severity" if self.own => self.severity = Some(value),
            "source" if self.own => self.source = Some(value),
            "error" if self.own => self.error = Some(value),
            other => {
                let _ = write!(self.extra, " {other}={value}");
            }
        }
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.set(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.set(field.name(), format!("{value:?}"));
    }
}

/// `FormatEvent` that writes the same line as the façade's formatter.
pub struct LineFormat {
    config: Arc<LogConfig>,
}

impl LineFormat {
    pub fn new(config: Arc<LogConfig>) -> Self {
        Self { config }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut fields = EventFields {
            own: metadata.target() == TARGET,
            ..EventFields::default()
        };
        event.record(&mut fields);

        let severity = fields
            .severity
            .as_deref()
            .and_then(Severity::from_name)
            .unwrap_or_else(|| Severity::from_level(*metadata.level()));
        let source = fields.source.as_deref().unwrap_or(metadata.target());
        let message = fields.message + &fields.extra;

        let mut record = LogRecord::new(severity, source, &message);
        record.error = fields.error;

        let formatter = LineFormatter::new(self.config.colour_mode());
        writeln!(writer, "{}", formatter.format(&record))
    }
}

/// Keeps the filter of an installed subscriber swappable.
pub struct TracingHandle {
    reload_handle: reload::Handle<EnvFilter, Registry>,
}

impl TracingHandle {
    pub fn reload_filter(&self, filter: &str) -> Result<(), LogError> {
        let filter = EnvFilter::try_new(filter).map_err(|e| LogError::Subscriber(e.to_string()))?;
        self.reload_handle
            .reload(filter)
            .map_err(|e| LogError::Subscriber(e.to_string()))?;
        Ok(())
    }
}

/// Installs the global subscriber: a reloadable `EnvFilter` in front of a
/// stdout fmt layer using `LineFormat`.
pub fn install_subscriber(config: Arc<LogConfig>, filter: &str) -> Result<TracingHandle, LogError> {
    install_subscriber_with_writer(config, filter, io::stdout)
}

/// Same as `install_subscriber`, writing lines to `writer`.
pub fn install_subscriber_with_writer<W>(
    config: Arc<LogConfig>,
    filter: &str,
    writer: W,
) -> Result<TracingHandle, LogError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(filter).map_err(|e| LogError::Subscriber(e.to_string()))?;
    let (filter, reload_handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_fmt::layer()
                .event_format(LineFormat::new(config))
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))?;

    Ok(TracingHandle { reload_handle })
}
