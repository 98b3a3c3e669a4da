//! Level Gate - decides local emission and control flow per severity tag
//!
//! The gate never terminates anything itself: PANIC and FATAL come back as
//! an [`Outcome`] and only [`Outcome::resolve`] unwinds or exits.

use contracts::{Level, LocalSink, LogRecord, LoggerConfig};

/// Exit status used for FATAL records
pub const FATAL_EXIT_CODE: i32 = 1;

/// What the gate does with a level, before anything is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Write the line and return
    Emit,
    /// Drop the line silently
    Discard,
    /// Write the line, then unwind the caller
    EmitThenPanic,
    /// Write the line, then exit the process
    EmitThenExit,
}

impl Verdict {
    /// Whether the line reaches the local sink
    pub fn emits(self) -> bool {
        !matches!(self, Self::Discard)
    }
}

/// Result of running a record through the gate
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "PANIC and FATAL only take effect through `Outcome::resolve`"]
pub enum Outcome {
    Emitted,
    Discarded,
    /// Line was written; caller must unwind carrying it
    Panic(String),
    /// Line was written; process must exit
    Exit(String),
}

impl Outcome {
    /// Apply the control-flow effect of the outcome
    ///
    /// Returns normally for `Emitted` and `Discarded`.
    pub fn resolve(self) {
        match self {
            Self::Emitted | Self::Discarded => {}
            Self::Panic(line) => panic!("{line}"),
            Self::Exit(_) => std::process::exit(FATAL_EXIT_CODE),
        }
    }

    /// Whether the line was written to the local sink
    pub fn was_emitted(&self) -> bool {
        !matches!(self, Self::Discarded)
    }
}

/// Level Gate configured by the two debug flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelGate {
    debug: bool,
    debug_verbose: bool,
}

impl LevelGate {
    pub fn new(debug: bool, debug_verbose: bool) -> Self {
        Self {
            debug,
            debug_verbose,
        }
    }

    /// Gate built from the debug flags of a configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.debug, config.debug_verbose)
    }

    /// Decide what happens to a record of `level`
    ///
    /// DEBUG passes when either flag is set; DEBUGVERBOSE needs the verbose flag.
    pub fn verdict(&self, level: &Level) -> Verdict {
        match level {
            Level::Panic => Verdict::EmitThenPanic,
            Level::Fatal => Verdict::EmitThenExit,
            Level::Debug if self.debug || self.debug_verbose => Verdict::Emit,
            Level::Debug => Verdict::Discard,
            Level::DebugVerbose if self.debug_verbose => Verdict::Emit,
            Level::DebugVerbose => Verdict::Discard,
            Level::Err | Level::Warn | Level::Info | Level::Other(_) => Verdict::Emit,
        }
    }

    /// Write `record` to `sink` if the verdict allows it
    pub fn emit<S: LocalSink + ?Sized>(&self, sink: &S, record: &LogRecord) -> Outcome {
        let verdict = self.verdict(&record.level);
        if !verdict.emits() {
            return Outcome::Discarded;
        }

        let line = record.line();
        sink.write_line(&record.level, &line);

        match verdict {
            Verdict::EmitThenPanic => Outcome::Panic(line),
            Verdict::EmitThenExit => Outcome::Exit(line),
            Verdict::Emit | Verdict::Discard => Outcome::Emitted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    fn record(level: Level, message: &str) -> LogRecord {
        LogRecord::with_message("api", level, message)
    }

    #[test]
    fn test_default_levels_always_emit() {
        let gate = LevelGate::default();
        for level in [Level::Err, Level::Warn, Level::Info, Level::from("AUDIT")] {
            assert_eq!(gate.verdict(&level), Verdict::Emit, "{level}");
        }
    }

    #[test]
    fn test_debug_uses_either_flag() {
        assert_eq!(LevelGate::new(false, false).verdict(&Level::Debug), Verdict::Discard);
        assert_eq!(LevelGate::new(true, false).verdict(&Level::Debug), Verdict::Emit);
        assert_eq!(LevelGate::new(false, true).verdict(&Level::Debug), Verdict::Emit);
    }

    #[test]
    fn test_debug_verbose_needs_verbose_flag() {
        assert_eq!(
            LevelGate::new(true, false).verdict(&Level::DebugVerbose),
            Verdict::Discard
        );
        assert_eq!(
            LevelGate::new(false, true).verdict(&Level::DebugVerbose),
            Verdict::Emit
        );
    }

    #[test]
    fn test_emit_writes_exact_line() {
        let sink = MemorySink::new("mem");
        let outcome = LevelGate::default().emit(&sink, &record(Level::Info, "started on port 8080"));
        assert_eq!(outcome, Outcome::Emitted);
        assert_eq!(sink.lines(), vec!["api [INFO] started on port 8080"]);
    }

    #[test]
    fn test_discarded_debug_writes_nothing() {
        let sink = MemorySink::new("mem");
        let outcome = LevelGate::default().emit(&sink, &record(Level::Debug, "cache miss"));
        assert_eq!(outcome, Outcome::Discarded);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_panic_and_fatal_emit_before_outcome() {
        let sink = MemorySink::new("mem");
        let gate = LevelGate::default();

        let outcome = gate.emit(&sink, &record(Level::Panic, "boom"));
        assert_eq!(outcome, Outcome::Panic("api [PANIC] boom".to_string()));

        let outcome = gate.emit(&sink, &record(Level::Fatal, "gone"));
        assert_eq!(outcome, Outcome::Exit("api [FATAL] gone".to_string()));

        assert_eq!(sink.lines(), vec!["api [PANIC] boom", "api [FATAL] gone"]);
    }

    #[test]
    #[should_panic(expected = "api [PANIC] boom")]
    fn test_resolve_panic_unwinds_with_line() {
        Outcome::Panic("api [PANIC] boom".to_string()).resolve();
    }

    #[test]
    fn test_resolve_non_terminal_returns() {
        Outcome::Emitted.resolve();
        Outcome::Discarded.resolve();
    }
}
