use super::colour::ANSI_RESET;
use super::record::LogRecord;
use std::fmt::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// How colour escapes are applied to a coloured line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColourMode {
    /// Only the severity token is coloured.
    #[default]
    Short,
    /// The whole line is coloured.
    Long,
}

/// Renders records as
/// `<timestamp> | [<thread>] |-<SEVERITY> in <source> - <message>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter {
    mode: ColourMode,
}

impl LineFormatter {
    pub fn new(mode: ColourMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ColourMode {
        self.mode
    }

    /// Formats with the record's own severity colour.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        self.render(record, record.severity.colour())
    }

    /// Formats with an explicit colour escape, or none.
    pub fn render(&self, record: &LogRecord<'_>, colour: Option<&str>) -> String {
        let mut line = String::with_capacity(64 + record.source.len() + record.message.len());
        let severity = record.severity.name();

        if let (Some(colour), ColourMode::Long) = (colour, self.mode) {
            line.push_str(colour);
        }
        let _ = write!(
            line,
            "{} | [{}] |-",
            record.timestamp.format(TIMESTAMP_FORMAT),
            record.thread
        );
        match (colour, self.mode) {
            (Some(colour), ColourMode::Short) => {
                let _ = write!(line, "{colour}{severity}{ANSI_RESET}");
            }
            _ => line.push_str(severity),
        }
        let _ = write!(line, " in {} - ", record.source);
        push_single_line(&mut line, record.message);
        if let Some(error) = &record.error {
            line.push_str(": ");
            push_single_line(&mut line, error);
        }
        if let (Some(_), ColourMode::Long) = (colour, self.mode) {
            line.push_str(ANSI_RESET);
        }
        line
    }
}

/// Appends `text` with line breaks escaped so a record never spans lines.
fn push_single_line(line: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            c => line.push(c),
        }
    }
}
