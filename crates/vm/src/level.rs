//! Log severities and their mapping onto oracle server log levels.

use crate::LevelMappingError;
use core::{fmt, str::FromStr};

/// A raw log severity on the slog scale, where each named level is four steps apart.
///
/// Only the six named constants map to a [LogLevel]. Any other value is rejected when the
/// command is built. The default is [Severity::INFO].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Severity(pub i32);

impl Severity {
    /// Trace severity.
    pub const TRACE: Self = Self(-8);
    /// Debug severity.
    pub const DEBUG: Self = Self(-4);
    /// Info severity.
    pub const INFO: Self = Self(0);
    /// Warn severity.
    pub const WARN: Self = Self(4);
    /// Error severity.
    pub const ERROR: Self = Self(8);
    /// Critical severity.
    pub const CRIT: Self = Self(12);
}

impl From<tracing::Level> for Severity {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Self::TRACE,
            tracing::Level::DEBUG => Self::DEBUG,
            tracing::Level::INFO => Self::INFO,
            tracing::Level::WARN => Self::WARN,
            _ => Self::ERROR,
        }
    }
}

impl From<LogLevel> for Severity {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
            LogLevel::Crit => Self::CRIT,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of log levels accepted by the oracle servers, in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Trace
    Trace,
    /// Debug
    Debug,
    /// Info
    Info,
    /// Warn
    Warn,
    /// Error
    Error,
    /// Critical
    Crit,
}

impl LogLevel {
    /// All levels, in ascending severity.
    pub const ALL: [Self; 6] =
        [Self::Trace, Self::Debug, Self::Info, Self::Warn, Self::Error, Self::Crit];

    /// Returns the level for one of the six named severities.
    pub const fn from_severity(severity: Severity) -> Option<Self> {
        match severity {
            Severity::TRACE => Some(Self::Trace),
            Severity::DEBUG => Some(Self::Debug),
            Severity::INFO => Some(Self::Info),
            Severity::WARN => Some(Self::Warn),
            Severity::ERROR => Some(Self::Error),
            Severity::CRIT => Some(Self::Crit),
            _ => None,
        }
    }

    /// Returns the token passed to `op-program` via `--log.level`.
    pub const fn oracle_token(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Crit => "CRIT",
        }
    }

    /// Returns the number of `-v` flags `kona-host` needs to log at this level.
    ///
    /// `kona-host` logs errors with no flag and has no level above error, so [Self::Crit] maps to
    /// zero as well.
    pub const fn host_verbosity(&self) -> u8 {
        match self {
            Self::Trace => 4,
            Self::Debug => 3,
            Self::Info => 2,
            Self::Warn => 1,
            Self::Error | Self::Crit => 0,
        }
    }
}

impl TryFrom<Severity> for LogLevel {
    type Error = LevelMappingError;

    fn try_from(severity: Severity) -> Result<Self, LevelMappingError> {
        Self::from_severity(severity).ok_or(LevelMappingError::Severity(severity.0))
    }
}

impl FromStr for LogLevel {
    type Err = LevelMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "crit" | "critical" => Ok(Self::Crit),
            _ => Err(LevelMappingError::Name(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.oracle_token())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_oracle_tokens() {
        let cases = [
            (Severity::TRACE, "TRACE"),
            (Severity::DEBUG, "DEBUG"),
            (Severity::INFO, "INFO"),
            (Severity::WARN, "WARN"),
            (Severity::ERROR, "ERROR"),
            (Severity::CRIT, "CRIT"),
        ];

        for (severity, token) in cases {
            let level = LogLevel::try_from(severity).unwrap();
            assert_eq!(level.oracle_token(), token);
            assert_eq!(Severity::from(level), severity);
        }
    }

    #[test]
    fn test_unmapped_severity() {
        for raw in [-9, -5, -1, 1, 3, 5, 9, 13, i32::MIN, i32::MAX] {
            assert_eq!(
                LogLevel::try_from(Severity(raw)),
                Err(LevelMappingError::Severity(raw))
            );
        }
    }

    #[test]
    fn test_from_severity() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_severity(Severity::from(level)), Some(level));
        }
        assert_eq!(LogLevel::from_severity(Severity(2)), None);
    }

    #[test]
    fn test_levels_ascend() {
        let severities = LogLevel::ALL.map(Severity::from).to_vec();
        let mut sorted = severities.clone();
        sorted.sort();
        assert_eq!(severities, sorted);
        assert!(LogLevel::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_tracing_level() {
        assert_eq!(Severity::from(tracing::Level::TRACE), Severity::TRACE);
        assert_eq!(Severity::from(tracing::Level::INFO), Severity::INFO);
        assert_eq!(Severity::from(tracing::Level::ERROR), Severity::ERROR);
    }

    #[test]
    fn test_parse_level_names() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("Critical".parse::<LogLevel>().unwrap(), LogLevel::Crit);
        assert_eq!(
            "fatal".parse::<LogLevel>(),
            Err(LevelMappingError::Name("fatal".to_string()))
        );
    }

    #[test]
    fn test_host_verbosity() {
        assert_eq!(LogLevel::Trace.host_verbosity(), 4);
        assert_eq!(LogLevel::Info.host_verbosity(), 2);
        assert_eq!(LogLevel::Error.host_verbosity(), 0);
        assert_eq!(LogLevel::Crit.host_verbosity(), 0);
    }
}
