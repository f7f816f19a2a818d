//! Environment-seeded verbosity
//!
//! Loggers never read the environment on their own; these helpers resolve a
//! verbosity value that is then passed to a constructor or builder.

use super::log_level::LogLevel;

/// Environment variable holding the initial verbosity
pub const VERBOSITY_ENV: &str = "VERBOSITY";

/// Parse a verbosity setting, falling back to INFO
///
/// Accepts an ordinal (`0` = FATAL .. `4` = DEBUG) or a level name. Anything
/// else, including out-of-range ordinals, yields [`LogLevel::Info`].
pub fn parse_verbosity(raw: &str) -> LogLevel {
    let raw = raw.trim();
    if let Ok(ordinal) = raw.parse::<u8>() {
        return LogLevel::from_ordinal(ordinal).unwrap_or_default();
    }
    raw.parse().unwrap_or_default()
}

/// Resolve an optional raw setting, INFO when absent
pub fn verbosity_from(raw: Option<&str>) -> LogLevel {
    raw.map(parse_verbosity).unwrap_or_default()
}

/// Read `VERBOSITY` from the process environment
pub fn verbosity_from_env() -> LogLevel {
    verbosity_from(std::env::var(VERBOSITY_ENV).ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(parse_verbosity("0"), LogLevel::Fatal);
        assert_eq!(parse_verbosity("1"), LogLevel::Error);
        assert_eq!(parse_verbosity("2"), LogLevel::Warn);
        assert_eq!(parse_verbosity("3"), LogLevel::Info);
        assert_eq!(parse_verbosity(" 4 "), LogLevel::Debug);
    }

    #[test]
    fn test_names() {
        assert_eq!(parse_verbosity("debug"), LogLevel::Debug);
        assert_eq!(parse_verbosity("WARNING"), LogLevel::Warn);
    }

    #[test]
    fn test_garbage_falls_back_to_info() {
        assert_eq!(parse_verbosity("abc"), LogLevel::Info);
        assert_eq!(parse_verbosity(""), LogLevel::Info);
        assert_eq!(parse_verbosity("5"), LogLevel::Info);
        assert_eq!(parse_verbosity("-1"), LogLevel::Info);
        assert_eq!(parse_verbosity("999"), LogLevel::Info);
    }

    #[test]
    fn test_absent_is_info() {
        assert_eq!(verbosity_from(None), LogLevel::Info);
        assert_eq!(verbosity_from(Some("1")), LogLevel::Error);
    }
}
