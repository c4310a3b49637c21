//! The process-wide log writer
//!
//! Global lifecycle state lives behind one lock; each logging call goes
//! through the [`message`]/[`message_at`]/[`message_to`] entry family and
//! flushes through a [`Message`] builder when it drops.

mod destination;
mod level;
mod message;
mod state;

pub use destination::Destination;
pub use level::{Level, ParseLevelError};
pub use message::{message, message_at, message_to, Message};
pub use state::{finalize, initialize, set_level, status, WriterStatus};

// Tests share one process-wide writer; serialize the ones that touch it.
#[cfg(test)]
pub(crate) fn test_guard() -> parking_lot::MutexGuard<'static, ()> {
    static LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
    LOCK.lock()
}
