//! Walkthrough of the writer's public surface, mirroring a typical
//! host-program session.

use scopelog_core::{facade, finalize, info_log, initialize, message, message_at, set_level, warn_log, Level};

fn main() {
    // must run before logging lands in the file; without it the calls
    // below would degrade to raw stdout passthrough
    initialize("log.txt");

    // free-form writes: raw text, the caller controls line breaks
    message().push("Hello World! ");
    message().push("Write to log freely....\n\n");

    // discarded: the default threshold is INFO
    message_at(Level::Debug).push(
        "Debug message. This should not be printed since the default minimum logging level is at INFO.",
    );

    set_level(Level::Debug);

    message_at(Level::Debug).push(
        "Debug message. This should be printed since the minimum logging level is now at DEBUG.",
    );
    message_at(Level::Info).push("Normal message.");
    message_at(Level::Warning).push("Warning message.");
    message_at(Level::Error).push("Error message.");

    // formatted variants and the standard facade route the same way
    info_log!("{} widgets processed", 3);
    warn_log!("disk {}% full", 91);
    facade::install();
    log::error!("facade error message");

    // releases the log file handle
    finalize();
}
