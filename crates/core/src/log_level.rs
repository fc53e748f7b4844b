use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Log levels understood by the GWT tree logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Trace,
    Debug,
    Spam,
    All,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Spam => "SPAM",
            LogLevel::All => "ALL",
        }
    }

    /// Pick the GWT level matching the most verbose level our own logger emits.
    pub fn from_host() -> Self {
        Self::from_filter(LevelFilter::current())
    }

    pub fn from_filter(filter: LevelFilter) -> Self {
        if filter >= LevelFilter::TRACE {
            LogLevel::Trace
        } else if filter >= LevelFilter::DEBUG {
            LogLevel::Debug
        } else if filter >= LevelFilter::INFO {
            LogLevel::Info
        } else if filter >= LevelFilter::WARN {
            LogLevel::Warn
        } else {
            LogLevel::Error
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(LogLevel::Error),
            "WARN" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "SPAM" => Ok(LogLevel::Spam),
            "ALL" => Ok(LogLevel::All),
            _ => Err(Error::InvalidLogLevel(s.to_string())),
        }
    }
}
