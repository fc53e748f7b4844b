//! Parsed GWT version strings
//!
//! Versions have the shape `major.minor[.patch]`. Only `major` and `minor` are
//! numeric; the patch part is kept verbatim so suffixes like `0-rc1` survive.

use crate::error::VersionParseError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GwtVersion {
    major: u32,
    minor: u32,
    patch: String,
}

impl GwtVersion {
    /// Parse a version string.
    ///
    /// Returns `Ok(None)` when the string is empty or only whitespace, which
    /// callers treat as "no version specified" rather than as an error.
    pub fn parse(version: &str) -> Result<Option<Self>, VersionParseError> {
        if version.trim().is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = version.splitn(3, '.').collect();
        if parts.len() < 2 {
            return Err(VersionParseError::new(version));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| VersionParseError::new(version))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| VersionParseError::new(version))?;
        let patch = parts.get(2).copied().unwrap_or("0").to_string();

        Ok(Some(Self {
            major,
            minor,
            patch,
        }))
    }

    /// Same as [`GwtVersion::parse`] for a value that may be missing entirely.
    pub fn parse_optional(version: Option<&str>) -> Result<Option<Self>, VersionParseError> {
        match version {
            Some(v) => Self::parse(v),
            None => Ok(None),
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// Compares `(major, minor)` only; the patch never participates.
    pub fn is_at_least(&self, major_min: u32, minor_min: u32) -> bool {
        self.major > major_min || (self.major == major_min && self.minor >= minor_min)
    }
}

impl fmt::Display for GwtVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
