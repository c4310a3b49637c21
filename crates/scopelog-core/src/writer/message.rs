//! Per-call message builders and flush-on-drop semantics

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crate::clock;

use super::state::STATE;
use super::{Destination, Level};

/// A single in-flight log message.
///
/// Accumulates text through [`push`](Message::push) or `write!` and
/// flushes exactly once when dropped at the end of the logging
/// statement. Below-threshold messages are discarded whole at that
/// point; nothing is ever partially written.
pub struct Message {
    buf: String,
    level: Level,
    destination: Destination,
    free_form: bool,
}

/// Begin a free-form message: raw passthrough to stdout (and the log
/// file when one is open), no header, no forced newline.
pub fn message() -> Message {
    Message {
        buf: String::new(),
        level: Level::Info,
        destination: Destination::Stdout,
        free_form: true,
    }
}

/// Begin a leveled message with the default console for its level.
///
/// Before `initialize` this degrades to [`message`].
pub fn message_at(level: Level) -> Message {
    message_to(level, Destination::for_level(level))
}

/// Begin a leveled message with an explicit destination.
///
/// The buffer is pre-seeded with the `[<elapsed>] (<level>) ` header.
/// Before `initialize` this degrades to [`message`], ignoring both
/// arguments.
pub fn message_to(level: Level, destination: Destination) -> Message {
    if !STATE.lock().initialized {
        return message();
    }
    let mut buf = String::new();
    let _ = write!(buf, "[{}] ({}) ", clock::time_elapsed(), level);
    Message {
        buf,
        level,
        destination,
        free_form: false,
    }
}

impl Message {
    /// Append any displayable value. Chainable; no length limit.
    pub fn push(mut self, value: impl fmt::Display) -> Self {
        let _ = write!(self.buf, "{}", value);
        self
    }
}

impl fmt::Write for Message {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

impl Drop for Message {
    fn drop(&mut self) {
        let mut state = STATE.lock();
        if self.level < state.min_level {
            return;
        }
        if !self.free_form {
            self.buf.push('\n');
        }
        if let Some(ref mut file) = state.file {
            let _ = file.write_all(self.buf.as_bytes());
            let _ = file.flush();
        }
        drop(state);

        match self.destination {
            Destination::FileOnly => {}
            Destination::Stderr => {
                let mut stream = io::stderr();
                let _ = stream.write_all(self.buf.as_bytes());
                let _ = stream.flush();
            }
            Destination::Stdout => {
                let mut stream = io::stdout();
                let _ = stream.write_all(self.buf.as_bytes());
                let _ = stream.flush();
            }
        }
    }
}

/// Emit one debug-level message with `format!` arguments.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        $crate::writer::message_at($crate::writer::Level::Debug).push(format_args!($($arg)*));
    }};
}

/// Emit one info-level message with `format!` arguments.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{
        $crate::writer::message_at($crate::writer::Level::Info).push(format_args!($($arg)*));
    }};
}

/// Emit one warning-level message with `format!` arguments.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {{
        $crate::writer::message_at($crate::writer::Level::Warning).push(format_args!($($arg)*));
    }};
}

/// Emit one error-level message with `format!` arguments.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        $crate::writer::message_at($crate::writer::Level::Error).push(format_args!($($arg)*));
    }};
}

/// Emit one free-form message with `format!` arguments: no header, no
/// forced newline.
#[macro_export]
macro_rules! raw_log {
    ($($arg:tt)*) => {{
        $crate::writer::message().push(format_args!($($arg)*));
    }};
}
