use super::Parser;

#[derive(Parser, Debug)]
pub struct Cli {
    #[arg(long)]
    pub settings: Option<String>,
    /// Overrides the cutoff from the settings file.
    #[arg(long)]
    pub priority: Option<String>,
    /// Replaces the tracing backend's filter once startup logging is done.
    #[arg(long)]
    pub reload_filter: Option<String>,
}
