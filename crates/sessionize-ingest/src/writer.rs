use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use sessionize_core::SessionRecord;

use crate::reader::TIMESTAMP_FORMAT;

/// Write one CSV row per session, no header:
/// `ip,start,end,length,count`, timestamps in the ingested textual format.
pub fn write_sessions(path: &Path, records: &[SessionRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{}",
            record.client_id,
            record.start_time.format(TIMESTAMP_FORMAT),
            record.true_end_time.format(TIMESTAMP_FORMAT),
            record.length_secs,
            record.event_count,
        )
        .with_context(|| format!("Failed to write output file: {:?}", path))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush output file: {:?}", path))?;

    Ok(())
}
