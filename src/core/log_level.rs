//! Log level definitions
//!
//! Levels are ordered by verbosity: `Fatal` is the least verbose (ordinal 0)
//! and `Debug` the most verbose (ordinal 4). A logger's configured level acts
//! as a verbosity ceiling, so a record is written iff `level <= verbosity`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
}

impl LogLevel {
    /// Every level, from least to most verbose
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(LogLevel::Fatal),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::Warn),
            3 => Some(LogLevel::Info),
            4 => Some(LogLevel::Debug),
            _ => None,
        }
    }

    /// Gate check: is a record at this level written under `verbosity`?
    #[inline]
    pub const fn is_enabled_at(self, verbosity: LogLevel) -> bool {
        self as u8 <= verbosity as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Info => Cyan,
            LogLevel::Debug => Magenta,
            LogLevel::Warn => Yellow,
            LogLevel::Error | LogLevel::Fatal => Red,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(LogLevel::Fatal.ordinal(), 0);
        assert_eq!(LogLevel::Error.ordinal(), 1);
        assert_eq!(LogLevel::Warn.ordinal(), 2);
        assert_eq!(LogLevel::Info.ordinal(), 3);
        assert_eq!(LogLevel::Debug.ordinal(), 4);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_from_ordinal() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_ordinal(level.ordinal()), Some(level));
        }
        assert_eq!(LogLevel::from_ordinal(5), None);
        assert_eq!(LogLevel::from_ordinal(u8::MAX), None);
    }

    #[test]
    fn test_gate() {
        assert!(LogLevel::Fatal.is_enabled_at(LogLevel::Fatal));
        assert!(LogLevel::Info.is_enabled_at(LogLevel::Info));
        assert!(LogLevel::Warn.is_enabled_at(LogLevel::Info));
        assert!(!LogLevel::Debug.is_enabled_at(LogLevel::Info));
        assert!(!LogLevel::Error.is_enabled_at(LogLevel::Fatal));
    }

    #[test]
    fn test_fatal_enabled_at_every_verbosity() {
        for verbosity in LogLevel::ALL {
            assert!(LogLevel::Fatal.is_enabled_at(verbosity));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_colors() {
        assert_eq!(LogLevel::Info.color(), colored::Color::Cyan);
        assert_eq!(LogLevel::Debug.color(), colored::Color::Magenta);
        assert_eq!(LogLevel::Warn.color(), colored::Color::Yellow);
        assert_eq!(LogLevel::Error.color(), colored::Color::Red);
        assert_eq!(LogLevel::Fatal.color(), colored::Color::Red);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"WARN\"");
        let level: LogLevel = serde_json::from_str("\"DEBUG\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
