//! Wall-clock helpers for arrival stamps and event timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in milliseconds since the Unix epoch.
///
/// Falls back to zero if the system clock reports a time before the epoch,
/// which only happens on badly misconfigured hosts.
#[must_use]
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
