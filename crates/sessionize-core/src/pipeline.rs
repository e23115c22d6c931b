use crate::aggregator::summarize;
use crate::cutoff::global_max_timestamp;
use crate::ordering::sort_records;
use crate::segmenter::segment;
use crate::types::{Event, SessionRecord};

/// Run the whole batch computation: segment, resolve the EOF cutoff,
/// aggregate, sort. One ordered row per (client, session) pair.
///
/// The global maximum timestamp is reduced once up front and passed down by
/// value; it is the only piece of state shared across session groups.
pub fn sessionize(events: &[Event], inactivity_secs: i64) -> Vec<SessionRecord> {
    let Some(global_max) = global_max_timestamp(events) else {
        return Vec::new();
    };

    let groups = segment(events, inactivity_secs);

    let mut records: Vec<SessionRecord> = groups
        .iter()
        .filter_map(|group| summarize(group, global_max, inactivity_secs))
        .collect();

    sort_records(&mut records);
    records
}
