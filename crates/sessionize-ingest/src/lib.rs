pub mod reader;
pub mod writer;

pub use reader::{read_events, EventLog, LineError, TIMESTAMP_FORMAT};
pub use writer::write_sessions;
