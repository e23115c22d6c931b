use chrono::NaiveDateTime;

use crate::cutoff::resolve_effective_end;
use crate::segmenter::SessionEvents;
use crate::types::SessionRecord;

/// Reduce one session group to its summary record.
///
/// Count, min and max are order-independent over the member events, so the
/// reduction does not care how the group was assembled. Length uses the
/// inclusive-range convention: `true_end - start` in whole seconds, plus
/// one, so a session observed at a single instant has length 1. The
/// effective end never feeds the length.
///
/// Returns `None` for an empty group; the segmenter never produces one.
pub fn summarize(
    group: &SessionEvents<'_>,
    global_max: NaiveDateTime,
    inactivity_secs: i64,
) -> Option<SessionRecord> {
    let first = group.events.first()?;

    let mut start_time = first.timestamp;
    let mut true_end_time = first.timestamp;
    let mut first_entry_order = first.entry_order;

    for event in &group.events {
        start_time = start_time.min(event.timestamp);
        true_end_time = true_end_time.max(event.timestamp);
        first_entry_order = first_entry_order.min(event.entry_order);
    }

    let length_secs = true_end_time.signed_duration_since(start_time).num_seconds() + 1;

    Some(SessionRecord {
        client_id: group.client_id.to_string(),
        session_seq: group.session_seq,
        event_count: group.events.len(),
        start_time,
        true_end_time,
        effective_end_time: resolve_effective_end(true_end_time, global_max, inactivity_secs),
        length_secs,
        first_entry_order,
    })
}
