//! File format codecs for shelf persistence.
//!
//! Each submodule exposes a `save(path, &[Book])` / `load(path)` pair.
//! The codecs only read and write files; whether a load appends to or
//! replaces the in-memory shelf is decided by [`Library`](crate::Library).

pub mod binary;
pub mod csv;
pub mod json;
pub mod text;

use std::fmt;
use std::str::FromStr;

use crate::error::EstanteError;

/// Formats accepted by [`Library::backup`](crate::Library::backup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupFormat {
    Json,
    Binary,
}

impl BackupFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for BackupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BackupFormat {
    type Err = EstanteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" => Ok(Self::Binary),
            other => Err(EstanteError::InvalidFormat {
                format: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("json".parse::<BackupFormat>().unwrap(), BackupFormat::Json);
        assert_eq!(
            "binary".parse::<BackupFormat>().unwrap(),
            BackupFormat::Binary
        );
        assert_eq!("JSON".parse::<BackupFormat>().unwrap(), BackupFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "xml".parse::<BackupFormat>().unwrap_err();
        assert!(matches!(
            err,
            EstanteError::InvalidFormat { ref format } if format == "xml"
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(BackupFormat::Json.to_string(), "json");
        assert_eq!(BackupFormat::Binary.to_string(), "binary");
    }
}
