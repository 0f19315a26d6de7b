#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("unknown severity: {0}")]
    UnknownSeverity(String),
    #[error("settings error: {0}")]
    Settings(#[from] config::ConfigError),
    #[error("subscriber error: {0}")]
    Subscriber(String),
}
