use chrono::{Duration, NaiveDateTime};

use crate::types::Event;

/// The single end-of-observation instant: the latest timestamp anywhere in
/// the log, independent of client. `None` on an empty log.
pub fn global_max_timestamp(events: &[Event]) -> Option<NaiveDateTime> {
    events.iter().map(|e| e.timestamp).max()
}

/// Decide a session's effective end for ordering purposes.
///
/// A session is only provably closed by inactivity if some later activity
/// exists well past its last event. When `true_end` falls within the
/// threshold window of the log's end, "client went idle" and "log ran out"
/// are indistinguishable, so the effective end is pinned to `global_max`.
/// The comparison is strictly `<`: a session ending exactly on the boundary
/// counts as truncated.
pub fn resolve_effective_end(
    true_end: NaiveDateTime,
    global_max: NaiveDateTime,
    inactivity_secs: i64,
) -> NaiveDateTime {
    if true_end < global_max - Duration::seconds(inactivity_secs) {
        true_end
    } else {
        global_max
    }
}
