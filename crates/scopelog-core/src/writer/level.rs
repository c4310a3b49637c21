//! Severity levels

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a message, ordered lowest to highest.
///
/// The ordering drives threshold filtering and default console
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Level {
    /// Name rendered inside a message header.
    ///
    /// The mixed casing is part of the on-disk format.
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("debug") {
            Ok(Level::Debug)
        } else if s.eq_ignore_ascii_case("info") {
            Ok(Level::Info)
        } else if s.eq_ignore_ascii_case("warning") {
            Ok(Level::Warning)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Level::Error)
        } else {
            Err(ParseLevelError(s.to_string()))
        }
    }
}
