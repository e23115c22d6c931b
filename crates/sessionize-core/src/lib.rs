mod aggregator;
mod cutoff;
mod ordering;
mod pipeline;
mod segmenter;
mod types;

pub use aggregator::summarize;
pub use cutoff::{global_max_timestamp, resolve_effective_end};
pub use ordering::sort_records;
pub use pipeline::sessionize;
pub use segmenter::{segment, SessionEvents};
pub use types::{Event, SessionRecord};
