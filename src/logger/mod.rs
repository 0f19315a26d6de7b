//! Leveled console logging with per-source loggers.
//! See `bin/logger_demo.rs` for every severity rendered in both colour modes.

pub mod colour;

mod error;
pub use error::*;

mod severity;
pub use severity::*;

mod record;
pub use record::*;

mod format;
pub use format::*;

mod sink;
pub use sink::*;

mod logger;
pub use logger::*;

mod ext;
pub use ext::*;

mod bridge;
pub use bridge::*;
