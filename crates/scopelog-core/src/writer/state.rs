//! Global writer state and lifecycle

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::Level;
use crate::clock;

/// Process-wide writer state. One instance, guarded by one lock.
pub(crate) struct WriterState {
    pub(crate) initialized: bool,
    pub(crate) file: Option<File>,
    pub(crate) min_level: Level,
}

impl WriterState {
    fn new() -> Self {
        Self {
            initialized: false,
            file: None,
            min_level: Level::default(),
        }
    }
}

pub(crate) static STATE: Lazy<Mutex<WriterState>> = Lazy::new(|| Mutex::new(WriterState::new()));

/// Snapshot of the writer's lifecycle and file health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterStatus {
    /// True between `initialize` and `finalize`
    pub initialized: bool,
    /// True when the log file opened and is still held
    pub file_open: bool,
    /// Current severity threshold
    pub min_level: Level,
}

/// Open the log file at `path` in append mode and mark the writer ready.
///
/// Resets the threshold to [`Level::Info`] and writes the START banner.
/// A file that cannot be opened is not an error: the writer still comes
/// up, console output keeps working, and file appends become no-ops;
/// [`status`] reports whether the file is actually open. Initializing
/// again without an intervening [`finalize`] closes the previous file
/// without an END banner.
pub fn initialize(path: impl AsRef<Path>) {
    clock::anchor();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok();
    if let Some(ref mut f) = file {
        let _ = writeln!(f, "========== START: {} ==========\n", clock::date_time());
        let _ = f.flush();
    }

    let mut state = STATE.lock();
    state.min_level = Level::default();
    state.file = file;
    state.initialized = true;
}

/// Set the minimum severity a message needs to be written.
///
/// Takes effect for every flush after this call, including builders
/// already in flight.
pub fn set_level(level: Level) {
    STATE.lock().min_level = level;
}

/// Write the END banner, close the log file, and mark the writer as
/// uninitialized.
///
/// Safe to call when never initialized. Logging calls made afterwards
/// degrade to console-only free-form output.
pub fn finalize() {
    let mut state = STATE.lock();
    if let Some(mut file) = state.file.take() {
        let _ = writeln!(file, "\n========== END: {} ==========\n", clock::date_time());
        let _ = file.flush();
    }
    state.initialized = false;
}

/// Current lifecycle and file health.
pub fn status() -> WriterStatus {
    let state = STATE.lock();
    WriterStatus {
        initialized: state.initialized,
        file_open: state.file.is_some(),
        min_level: state.min_level,
    }
}

#[cfg(test)]
mod tests {
    use super::super::{message_at, message_to, test_guard, Destination};
    use super::*;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_banners_frame_the_session() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.log");

        initialize(&path);
        finalize();

        let contents = read(&path);
        assert!(contents.starts_with("========== START: "));
        assert!(contents.contains("\n========== END: "));
        assert!(contents.ends_with("==========\n\n"));
    }

    #[test]
    fn test_threshold_admits_levels_at_or_above() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();
        let levels = [Level::Debug, Level::Info, Level::Warning, Level::Error];

        for threshold in levels {
            let path = dir.path().join(format!("{}.log", threshold.name()));
            initialize(&path);
            set_level(threshold);
            for level in levels {
                message_to(level, Destination::FileOnly)
                    .push("probe-")
                    .push(level.name());
            }
            finalize();

            let contents = read(&path);
            for level in levels {
                let marker = format!("probe-{}", level.name());
                assert_eq!(
                    contents.contains(&marker),
                    level >= threshold,
                    "level {} against threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_default_threshold_discards_debug() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default.log");

        initialize(&path);
        message_to(Level::Debug, Destination::FileOnly).push("hidden");
        set_level(Level::Debug);
        message_to(Level::Debug, Destination::FileOnly).push("visible");
        finalize();

        let contents = read(&path);
        assert!(!contents.contains("hidden"));
        assert!(contents.contains("(debug) visible"));
    }

    #[test]
    fn test_initialize_resets_threshold() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();

        let first = dir.path().join("first.log");
        initialize(&first);
        set_level(Level::Error);
        finalize();

        let second = dir.path().join("second.log");
        initialize(&second);
        message_to(Level::Info, Destination::FileOnly).push("back to info");
        finalize();

        assert!(read(&second).contains("(info) back to info"));
    }

    #[test]
    fn test_finalize_without_initialize_is_a_no_op() {
        let _guard = test_guard();
        finalize();
        finalize();
        assert!(!status().initialized);
    }

    #[test]
    fn test_status_tracks_lifecycle() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.log");

        finalize();
        assert!(!status().initialized);
        assert!(!status().file_open);

        initialize(&path);
        let ready = status();
        assert!(ready.initialized);
        assert!(ready.file_open);
        assert_eq!(ready.min_level, Level::Info);

        finalize();
        assert!(!status().initialized);
        assert!(!status().file_open);
    }

    #[test]
    fn test_open_failure_degrades_to_console_only() {
        let _guard = test_guard();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("scopelog.log");

        initialize(&path);
        let degraded = status();
        assert!(degraded.initialized);
        assert!(!degraded.file_open);

        // still safe to log; output reaches the console stream only
        message_at(Level::Error).push("no file behind this");
        finalize();
        assert!(!path.exists());
    }
}
