//! Settings file loading. See `bin/settings_demo.rs` for usage.

mod cli;
pub use clap::Parser;
pub use cli::*;

mod settings;
pub use settings::*;
