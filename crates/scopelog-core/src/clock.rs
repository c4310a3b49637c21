//! Elapsed-time and wall-clock helpers for message decoration

use std::time::Instant;

use chrono::{Datelike, Local, Timelike};
use once_cell::sync::Lazy;

static START: Lazy<Instant> = Lazy::new(Instant::now);

/// Force the elapsed-time anchor. The first touch wins; `initialize`
/// calls this so elapsed seconds count from writer startup.
pub(crate) fn anchor() {
    Lazy::force(&START);
}

/// Seconds elapsed since the clock anchor.
pub fn time_elapsed() -> f64 {
    START.elapsed().as_secs_f64()
}

/// Current local date and time as `{Y}-{M}-{D} {H}:{M}:{S}`.
///
/// Components are not zero-padded; month runs 1-12.
pub fn date_time() -> String {
    let now = Local::now();
    format!(
        "{}-{}-{} {}:{}:{}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    )
}
