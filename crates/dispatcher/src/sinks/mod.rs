//! Sink implementations
//!
//! Local: WriterSink (stderr / file), LogSink (tracing), MemorySink.
//! Remote: SlackClient.

mod log;
mod memory;
mod slack;
mod writer;

pub use self::log::LogSink;
pub use self::memory::MemorySink;
pub use self::slack::{SlackClient, SlackClientConfig};
pub use self::writer::WriterSink;
