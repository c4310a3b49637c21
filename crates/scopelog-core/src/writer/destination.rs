//! Console destinations for accepted messages

use super::Level;

/// Where an accepted message goes besides the log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Log file only, no console mirror
    FileOnly,
    /// Log file plus the error console
    Stderr,
    /// Log file plus the standard console
    Stdout,
}

impl Destination {
    /// Default console for a level: warnings and errors go to stderr,
    /// everything below to stdout.
    pub fn for_level(level: Level) -> Self {
        if level >= Level::Warning {
            Destination::Stderr
        } else {
            Destination::Stdout
        }
    }
}
