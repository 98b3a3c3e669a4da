//! WriterSink - newline-terminated lines to stderr, a file, or any writer

use chrono::Local;
use contracts::{Level, LocalSink};
use std::fs::{File, OpenOptions};
use std::io::{self, Stderr, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error};

/// Timestamp prefix layout: `2024/01/31 12:00:00 `
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S ";

/// Local sink writing one line per record
///
/// Each line is written and flushed under a lock, so concurrent callers
/// never interleave partial lines.
pub struct WriterSink<W: Write + Send> {
    name: String,
    timestamps: bool,
    writer: Mutex<W>,
}

impl WriterSink<Stderr> {
    /// Sink writing to standard error
    pub fn stderr(name: impl Into<String>) -> Self {
        Self::new(name, io::stderr())
    }
}

impl WriterSink<File> {
    /// Sink appending to `path`, creating it if needed
    pub fn append(name: impl Into<String>, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let name = name.into();
        debug!(sink = %name, path = %path.display(), "WriterSink opened file");
        Ok(Self::new(name, file))
    }
}

impl<W: Write + Send> WriterSink<W> {
    /// Sink over an arbitrary writer, without timestamps
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            timestamps: false,
            writer: Mutex::new(writer),
        }
    }

    /// Prefix every line with the local date and time
    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn render(&self, line: &str) -> String {
        if self.timestamps {
            format!("{}{line}\n", Local::now().format(TIMESTAMP_FORMAT))
        } else {
            format!("{line}\n")
        }
    }
}

impl<W: Write + Send> LocalSink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, _level: &Level, line: &str) {
        let rendered = self.render(line);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Err(e) = writer
            .write_all(rendered.as_bytes())
            .and_then(|()| writer.flush())
        {
            // Log but don't fail - the caller has no error channel
            error!(sink = %self.name, error = %e, "Local write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_sink_appends_newline() {
        let sink = WriterSink::new("buf", Vec::new());
        sink.write_line(&Level::Info, "api [INFO] started on port 8080");
        sink.write_line(&Level::Warn, "api [WARN] slow");

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "api [INFO] started on port 8080\napi [WARN] slow\n");
    }

    #[test]
    fn test_writer_sink_timestamp_prefix() {
        let sink = WriterSink::new("buf", Vec::new()).with_timestamps(true);
        sink.write_line(&Level::Info, "api [INFO] up");

        let written = String::from_utf8(sink.into_inner()).unwrap();
        // "YYYY/MM/DD HH:MM:SS " is 20 characters
        assert_eq!(&written[4..5], "/");
        assert_eq!(&written[20..], "api [INFO] up\n");
    }

    #[test]
    fn test_append_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let sink = WriterSink::append("file", &path).unwrap();
        sink.write_line(&Level::Err, "db [ERR] down");
        drop(sink);

        let sink = WriterSink::append("file", &path).unwrap();
        sink.write_line(&Level::Info, "db [INFO] up");
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "db [ERR] down\ndb [INFO] up\n");
    }
}
