//! # Contracts
//!
//! Shared interface contracts between the logger crates: severity levels,
//! log records, sink traits, configuration values and the error type.
//! Business crates depend on this crate only, never the reverse.
//!
//! ## Line format
//! Every sink sees the same rendered line: `<module> [<LEVEL>] <message>`.

mod config;
mod error;
mod level;
mod record;
mod sink;

pub use config::*;
pub use error::*;
pub use level::Level;
pub use record::LogRecord;
pub use sink::*;
