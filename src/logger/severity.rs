use super::colour::*;
use super::error::LogError;
use std::fmt;
use std::str::FromStr;
use tracing::Level;

/// Importance of a log record. Lower ranks are more verbose.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    /// Something is working.
    Ok,
    /// A task completed correctly or went as expected.
    Good,
    /// Something worth highlighting to the user.
    Alert,
    Warning,
    Error,
    /// Critical failure that cannot be recovered from.
    Fatal,
    /// Always shown; nothing ranks above it, so no cutoff can hide it.
    Silent,
}

impl Severity {
    /// Every severity in rank order.
    pub const ALL: [Severity; 10] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Ok,
        Severity::Good,
        Severity::Alert,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
        Severity::Silent,
    ];

    pub const MAX_RANK: usize = Self::ALL.len() - 1;

    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        Self::ALL.get(rank).copied()
    }

    /// Maps any integer onto a severity, clamping to the nearest bound.
    pub fn clamped(rank: i32) -> Self {
        let rank = rank.clamp(0, Self::MAX_RANK as i32) as usize;
        Self::ALL[rank]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Ok => "OK",
            Self::Good => "GOOD",
            Self::Alert => "ALERT",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Silent => "SILENT",
        }
    }

    /// Exact, case-sensitive lookup over the ordered names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    pub fn names() -> [&'static str; 10] {
        Self::ALL.map(Severity::name)
    }

    pub fn colour(self) -> Option<&'static str> {
        match self {
            Self::Verbose | Self::Debug | Self::Info => None,
            Self::Ok => Some(ANSI_GREEN),
            Self::Good => Some(ANSI_GREEN_BACKGROUND),
            Self::Alert => Some(ANSI_CYAN),
            Self::Warning => Some(ANSI_YELLOW),
            Self::Error => Some(ANSI_RED),
            Self::Fatal => Some(ANSI_RED_BACKGROUND),
            Self::Silent => Some(ANSI_WHITE_BACKGROUND),
        }
    }

    /// The `tracing` level a record of this severity is forwarded at.
    pub fn level(self) -> Level {
        match self {
            Self::Verbose => Level::TRACE,
            Self::Debug => Level::DEBUG,
            Self::Info | Self::Ok | Self::Good => Level::INFO,
            Self::Alert | Self::Warning => Level::WARN,
            Self::Error | Self::Fatal | Self::Silent => Level::ERROR,
        }
    }

    /// Severity for an event that did not come through the façade.
    pub fn from_level(level: Level) -> Self {
        match level {
            Level::TRACE => Self::Verbose,
            Level::DEBUG => Self::Debug,
            Level::INFO => Self::Info,
            Level::WARN => Self::Warning,
            _ => Self::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| LogError::UnknownSeverity(s.to_string()))
    }
}
