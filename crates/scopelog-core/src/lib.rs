//! Scopelog Core
//!
//! Process-wide leveled logging to a log file and the standard streams.
//! A single global writer owns the open log file and the severity
//! threshold; each logging call borrows a short-lived [`Message`] builder
//! that accumulates text and flushes exactly once when it goes out of
//! scope at the end of the statement.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scopelog_core::{initialize, finalize, message, message_at, set_level, Level};
//!
//! initialize("app.log");
//!
//! // Free-form: raw passthrough, no header, no forced newline
//! message().push("Hello World!\n");
//!
//! // Leveled: "[<elapsed>] (<level>) <text>\n", mirrored to a console stream
//! message_at(Level::Warning).push("disk almost full");
//!
//! set_level(Level::Debug);
//! message_at(Level::Debug).push("now visible");
//!
//! finalize();
//! ```
//!
//! Logging never fails the host program: file-open and write errors are
//! swallowed, and [`status`] exists for callers who want to know whether
//! output is actually reaching the file.

pub mod clock;
pub mod facade;
pub mod writer;

// Re-export the common surface
pub use writer::{
    finalize, initialize, message, message_at, message_to, set_level, status, Destination, Level,
    Message, ParseLevelError, WriterStatus,
};
