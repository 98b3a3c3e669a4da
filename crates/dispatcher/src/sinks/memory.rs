//! MemorySink - keeps lines in memory

use contracts::{Level, LocalSink};
use std::sync::Mutex;

/// Local sink that records every line, for tests and inspection
#[derive(Debug, Default)]
pub struct MemorySink {
    name: String,
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Lines written so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// (level, line) pairs written so far, in order
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drop everything recorded
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl LocalSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, level: &Level, line: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((level.clone(), line.to_string()));
    }
}
