//! `format!`-style front ends for [`Logger`](crate::Logger)
//!
//! ```ignore
//! use dispatcher::{emit, emit_remote, Level};
//!
//! emit!(logger, "api", Level::Info, "started on port {}", 8080);
//! emit_remote!(logger, "worker", "WARN", "queue depth {}", depth).await;
//! ```

/// Local-only emission; the level may be a [`Level`](crate::Level) or a tag string
#[macro_export]
macro_rules! emit {
    ($logger:expr, $module:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $module,
            $crate::Level::from($level),
            ::std::format_args!($($arg)+),
        )
    };
}

/// Dual-sink emission; evaluates to a future that must be awaited
///
/// The arguments are formatted inside their own statement so no borrowed
/// formatting state is held across the `.await`.
#[macro_export]
macro_rules! emit_remote {
    ($logger:expr, $module:expr, $level:expr, $($arg:tt)+) => {{
        let future = $logger.log_remote(
            $module,
            $crate::Level::from($level),
            ::std::format_args!($($arg)+),
        );
        future
    }};
}
