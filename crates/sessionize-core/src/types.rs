use chrono::NaiveDateTime;
use serde::Serialize;

/// One log entry as handed over by the ingestion side.
///
/// `entry_order` is the event's zero-based position among ingested events.
/// It only ever breaks ties in the output sort; segmentation never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub client_id: String,
    pub timestamp: NaiveDateTime,
    pub entry_order: usize,
}

/// Summary of one (client, session) group.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub client_id: String,
    /// 1-based session counter within the client, in opening order.
    pub session_seq: u32,
    pub event_count: usize,
    pub start_time: NaiveDateTime,
    pub true_end_time: NaiveDateTime,
    /// Equals `true_end_time` unless the session was still within the
    /// inactivity window when the log ran out, in which case it is pinned
    /// to the global maximum timestamp. Used for output ordering only.
    pub effective_end_time: NaiveDateTime,
    /// Inclusive span in whole seconds: a single-instant session has length 1.
    pub length_secs: i64,
    /// `entry_order` of the session's first member event.
    pub first_entry_order: usize,
}
