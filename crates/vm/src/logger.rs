//! Logger capabilities injected into the executors.

use crate::{LogLevel, Severity};
use tracing::{debug, error, info, trace, warn};

/// A logger handed to an executor.
///
/// The executor reads [OracleLogger::severity] to pick the log level of the server it launches,
/// and reports the assembled command through [OracleLogger::log]. Logging never fails from the
/// executor's point of view.
pub trait OracleLogger: Send + Sync {
    /// The severity this logger is configured at.
    fn severity(&self) -> Severity;

    /// Emits a message at the given level.
    fn log(&self, level: LogLevel, message: &str);
}

impl<L: OracleLogger + ?Sized> OracleLogger for &L {
    fn severity(&self) -> Severity {
        (**self).severity()
    }

    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message)
    }
}

/// An [OracleLogger] backed by the global `tracing` dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingLogger {
    severity: Severity,
}

impl TracingLogger {
    /// Creates a new [TracingLogger] that reports the given severity.
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new(Severity::INFO)
    }
}

impl OracleLogger for TracingLogger {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => trace!(target: "oracle_command", "{message}"),
            LogLevel::Debug => debug!(target: "oracle_command", "{message}"),
            LogLevel::Info => info!(target: "oracle_command", "{message}"),
            LogLevel::Warn => warn!(target: "oracle_command", "{message}"),
            LogLevel::Error => error!(target: "oracle_command", "{message}"),
            // `tracing` has no level above error.
            LogLevel::Crit => error!(target: "oracle_command", crit = true, "{message}"),
        }
    }
}

/// An [OracleLogger] that drops every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoopLogger {
    severity: Severity,
}

impl NoopLogger {
    /// Creates a new [NoopLogger] that reports the given severity.
    pub const fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Default for NoopLogger {
    fn default() -> Self {
        Self::new(Severity::INFO)
    }
}

impl OracleLogger for NoopLogger {
    fn severity(&self) -> Severity {
        self.severity
    }

    fn log(&self, _level: LogLevel, _message: &str) {
        // No-op
    }
}
