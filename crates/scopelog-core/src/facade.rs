//! Bridge from the standard `log` facade into the writer
//!
//! Host code that already speaks `log::info!` / `log::warn!` can route
//! those records through the writer by calling [`install`] once.

use log::{LevelFilter, Metadata, Record};

use crate::writer::{self, Level};

struct FacadeBridge;

static BRIDGE: FacadeBridge = FacadeBridge;

fn severity(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        // the writer has no trace level; fold it into debug
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for FacadeBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        severity(metadata.level()) >= writer::status().min_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            writer::message_at(severity(record.level())).push(record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the bridge as the process logger.
///
/// Level filtering stays with the writer, so the facade's max level is
/// left wide open. A second install attempt, or a competing logger, is
/// ignored rather than surfaced: logging setup never fails the host.
pub fn install() {
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}
