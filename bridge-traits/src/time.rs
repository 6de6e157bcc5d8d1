//! Time and Logging Abstractions
//!
//! Provides injectable time source and logging sink for testing and host integration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Time source trait
///
/// Abstracts system time so signed credentials can be minted against a
/// deterministic clock in tests.
///
/// # Example
///
/// ```
/// use bridge_traits::time::{Clock, SystemClock};
///
/// let clock = SystemClock;
/// assert!(clock.unix_timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in seconds
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at the given Unix timestamp (seconds).
    ///
    /// Out-of-range timestamps fall back to the Unix epoch.
    pub fn at_unix(seconds: i64) -> Self {
        Self(DateTime::from_timestamp(seconds, 0).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Target module/component
    pub target: String,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: HashMap<String, String>,
    /// Name of the span the event was recorded in
    pub span_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
            span_id: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }
}

/// Logger sink trait
///
/// Mirrors structured logs from the registry into the host's own logging
/// pipeline. Registration happens synchronously during start-up, so the sink
/// is synchronous as well.
///
/// # Security
///
/// Implementations must not persist credential values. The registry never
/// emits them, but host-side enrichment should follow the same rule.
///
/// # Example
///
/// ```
/// use bridge_traits::time::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
///
/// let logger = ConsoleLogger::default();
/// let entry = LogEntry::new(LogLevel::Error, "core_service", "Spotify misconfigured")
///     .with_field("field", "clientSecret");
/// logger.log(entry).ok();
/// ```
pub trait LoggerSink: Send + Sync {
    /// Forward a log entry to the host logging system
    fn log(&self, entry: LogEntry) -> Result<()>;

    /// Flush any buffered logs
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// Get the minimum log level that will be processed
    ///
    /// Logs below this level are dropped before reaching the sink.
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Console logger implementation for testing/development
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    pub min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl LoggerSink for ConsoleLogger {
    fn log(&self, entry: LogEntry) -> Result<()> {
        if entry.level >= self.min_level {
            println!(
                "[{}] {} {}: {}",
                entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                entry.level.as_str().to_uppercase(),
                entry.target,
                entry.message
            );

            if !entry.fields.is_empty() {
                println!("  Fields: {:?}", entry.fields);
            }
        }
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
