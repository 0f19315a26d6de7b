use crate::logger::{
    Log, LogError, LogSink, StdoutSink, TracingHandle, TracingSink,
    install_subscriber_with_writer,
};
use config::{Config, File};
use serde::Deserialize;
use std::io;
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Severity name; unknown names leave the cutoff at VERBOSE.
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default = "default_short_colours")]
    pub short_colours: bool,
    #[serde(default)]
    pub backend: Backend,
    /// `EnvFilter` directive, only used by the tracing backend.
    #[serde(default = "default_filter")]
    pub filter: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Stdout,
    Tracing,
}

fn default_priority() -> String {
    "VERBOSE".to_string()
}

fn default_short_colours() -> bool {
    true
}

fn default_filter() -> String {
    "trace".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            short_colours: default_short_colours(),
            backend: Backend::default(),
            filter: default_filter(),
        }
    }
}

impl LogSettings {
    /// Builds a `Log` writing to `sink` with these settings applied.
    pub fn build_with_sink(&self, sink: Arc<dyn LogSink>) -> Log {
        let log = Log::with_sink(sink);
        log.set_short_colours(self.short_colours);
        log.set_priority(&self.priority);
        log
    }

    /// Builds the configured `Log`. The tracing backend also installs the
    /// global subscriber, sharing the `Log`'s config, and returns its handle.
    pub fn build(&self) -> Result<(Log, Option<TracingHandle>), LogError> {
        self.build_with_writer(io::stdout)
    }

    /// Same as `build`, with the tracing backend writing lines to `writer`.
    pub fn build_with_writer<W>(&self, writer: W) -> Result<(Log, Option<TracingHandle>), LogError>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        match self.backend {
            Backend::Stdout => Ok((self.build_with_sink(Arc::new(StdoutSink)), None)),
            Backend::Tracing => {
                let log = Log::with_sink(Arc::new(TracingSink));
                log.set_short_colours(self.short_colours);
                let handle =
                    install_subscriber_with_writer(log.config().clone(), &self.filter, writer)?;
                log.set_priority(&self.priority);
                Ok((log, Some(handle)))
            }
        }
    }
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings, LogError> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{MemorySink, Severity};
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parses_log_section() {
        let file = settings_file(
            r#"
            [log]
            priority = "WARNING"
            short_colours = false
            backend = "tracing"
            filter = "info"
            "#,
        );
        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.log.priority, "WARNING");
        assert!(!settings.log.short_colours);
        assert_eq!(settings.log.backend, Backend::Tracing);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn missing_keys_use_defaults() {
        let file = settings_file("[log]\n");
        let settings = parse_settings(file.path().to_str()).unwrap();
        assert_eq!(settings.log.priority, "VERBOSE");
        assert!(settings.log.short_colours);
        assert_eq!(settings.log.backend, Backend::Stdout);
        assert_eq!(settings.log.filter, "trace");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            parse_settings(Some("")),
            Err(LogError::Settings(_))
        ));
        assert!(parse_settings(Some("does/not/exist.toml")).is_err());
    }

    #[test]
    fn build_applies_cutoff_and_colours() {
        let settings = LogSettings {
            priority: "ERROR".into(),
            short_colours: false,
            ..LogSettings::default()
        };
        let sink = Arc::new(MemorySink::new());
        let log = settings.build_with_sink(sink.clone());
        assert_eq!(log.cutoff(), Severity::Error);
        assert!(!log.short_colours());

        log.warning("Mod", "hidden");
        log.error("Mod", "shown");
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown\u{1b}[0m"));
    }

    #[test]
    fn unknown_priority_keeps_default() {
        let settings = LogSettings {
            priority: "LOUDEST".into(),
            ..LogSettings::default()
        };
        let log = settings.build_with_sink(Arc::new(MemorySink::new()));
        assert_eq!(log.priority(), "VERBOSE");
    }
}
