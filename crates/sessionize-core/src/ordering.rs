use crate::types::SessionRecord;

/// Impose the output order: effective end ascending, then start ascending,
/// then the first member's entry order. The last key is unique per session,
/// so the order is total and reruns are bit-identical.
pub fn sort_records(records: &mut [SessionRecord]) {
    records.sort_by_key(|r| (r.effective_end_time, r.start_time, r.first_entry_order));
}
