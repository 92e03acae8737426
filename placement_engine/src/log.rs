//! Internal logging system for the placement engine
//!
//! This module provides a small pluggable logging layer:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Optional severity threshold wrapper
//! - File and line information for ERROR logs (grid integrity faults, engine errors)

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route engine logs somewhere else (game console,
/// file, test capture buffer).
///
/// # Example
///
/// ```no_run
/// use placement_engine::placement::log::{Logger, LogEntry};
///
/// struct ConsoleOverlayLogger;
///
/// impl Logger for ConsoleOverlayLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "placement::BuildingGrid", "placement::Moveable")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (lock contention rounds, per-child relocation)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (structural faults, with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Format an entry as a plain (uncolored) line.
///
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - With location: `[timestamp] [SEVERITY] [source] message (file:line)`
pub fn format_entry(entry: &LogEntry) -> String {
    let datetime: DateTime<Local> = entry.timestamp.into();
    let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

    match (entry.file, entry.line) {
        (Some(file), Some(line)) => format!(
            "[{}] [{}] [{}] {} ({}:{})",
            timestamp, entry.severity.label(), entry.source, entry.message, file, line
        ),
        _ => format!(
            "[{}] [{}] [{}] {}",
            timestamp, entry.severity.label(), entry.source, entry.message
        ),
    }
}

/// Default logger implementation using colored console output
///
/// Warn and Error go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };
        let source = entry.source.bright_blue();

        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        if entry.severity >= LogSeverity::Warn {
            eprintln!("[{}] [{}] [{}] {}{}", timestamp, severity_str, source, entry.message, location);
        } else {
            println!("[{}] [{}] [{}] {}{}", timestamp, severity_str, source, entry.message, location);
        }
    }
}

/// Wraps another logger and drops entries below `min_severity`.
///
/// The grid logs a trace line for every expired lock round, which is noisy
/// under contention; hosts usually install `ThresholdLogger::new(DefaultLogger, LogSeverity::Info)`.
pub struct ThresholdLogger<L: Logger> {
    inner: L,
    min_severity: LogSeverity,
}

impl<L: Logger> ThresholdLogger<L> {
    pub fn new(inner: L, min_severity: LogSeverity) -> Self {
        Self { inner, min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }
}

impl<L: Logger> Logger for ThresholdLogger<L> {
    fn log(&self, entry: &LogEntry) {
        if entry.severity >= self.min_severity {
            self.inner.log(entry);
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
///
/// ```ignore
/// engine_trace!("placement::BuildingGrid", "lock busy, retrying");
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::placement::Engine::log(
            $crate::placement::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::placement::Engine::log(
            $crate::placement::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::placement::Engine::log(
            $crate::placement::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::placement::Engine::log(
            $crate::placement::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```ignore
/// engine_error!("placement::BuildingGrid", "Invalid list detected in bucket {}", index);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::placement::Engine::log_detailed(
            $crate::placement::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
