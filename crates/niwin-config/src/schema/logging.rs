//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to the niwin crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "niwin=trace",
            LogLevel::Debug => "niwin=debug",
            LogLevel::Info => "niwin=info",
            LogLevel::Warn => "niwin=warn",
            LogLevel::Error => "niwin=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().directive(), "niwin=info");
        assert_eq!(LogLevel::Trace.directive(), "niwin=trace");
    }
}
