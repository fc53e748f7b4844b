use std::io;

/// A GWT version string that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "GWT version {version} can not be parsed. Valid versions must have the format \
     major.minor.patch where major and minor are positive integer numbers."
)]
pub struct VersionParseError {
    pub version: String,
}

impl VersionParseError {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// Errors that can occur during gwt-runner operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    VersionParse(#[from] VersionParseError),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Result type alias for gwt-runner operations
pub type Result<T> = std::result::Result<T, Error>;
