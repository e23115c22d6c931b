use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use thiserror::Error;

use sessionize_core::Event;

/// Textual timestamp format of the log: separate `date` and `time` columns
/// joined with a space. Output rows use the same format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a data line was dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least {expected} fields, got {got}")]
    TooFewFields { expected: usize, got: usize },

    #[error("empty ip field")]
    EmptyClient,

    #[error("bad timestamp '{0}'")]
    BadTimestamp(String),
}

/// The ingested log: surviving events in input order, plus how many data
/// lines were dropped along the way.
#[derive(Debug)]
pub struct EventLog {
    pub events: Vec<Event>,
    pub skipped: usize,
}

/// Positions of the columns the pipeline needs; anything else in the log
/// (cik, accession, extention, ...) is ignored.
struct Columns {
    ip: usize,
    date: usize,
    time: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();

        let position = |name: &str| -> Result<usize> {
            names
                .iter()
                .position(|n| *n == name)
                .with_context(|| format!("Log header has no '{}' column", name))
        };

        Ok(Self {
            ip: position("ip")?,
            date: position("date")?,
            time: position("time")?,
        })
    }

    /// Fields a data line must have for all three columns to be present.
    fn min_fields(&self) -> usize {
        self.ip.max(self.date).max(self.time) + 1
    }
}

/// Read the access log into an ordered event list.
///
/// The first line is a header naming at least the `ip`, `date` and `time`
/// columns. Malformed data lines are dropped with a warning and do not
/// consume an entry-order slot; events keep their input order otherwise.
pub fn read_events(path: &Path) -> Result<EventLog> {
    let file = File::open(path).with_context(|| format!("Failed to open log file: {:?}", path))?;
    let mut lines = BufReader::new(file).lines();

    let header = lines
        .next()
        .with_context(|| format!("Log file {:?} is empty", path))?
        .with_context(|| "Failed to read log header")?;
    let columns = Columns::from_header(&header)?;

    let mut events: Vec<Event> = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in lines.enumerate() {
        let line = line.with_context(|| "Failed to read line from log file")?;
        if line.trim().is_empty() {
            continue;
        }

        // Data lines start at 2 (1 is the header).
        let line_number = index + 2;

        match parse_line(&line, &columns, events.len()) {
            Ok(event) => events.push(event),
            Err(e) => {
                tracing::warn!("Skipping log line {}: {}", line_number, e);
                skipped += 1;
            }
        }
    }

    Ok(EventLog { events, skipped })
}

fn parse_line(line: &str, columns: &Columns, entry_order: usize) -> Result<Event, LineError> {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() < columns.min_fields() {
        return Err(LineError::TooFewFields {
            expected: columns.min_fields(),
            got: fields.len(),
        });
    }

    let ip = fields[columns.ip].trim();
    if ip.is_empty() {
        return Err(LineError::EmptyClient);
    }

    let raw = format!("{} {}", fields[columns.date].trim(), fields[columns.time].trim());
    let timestamp = NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
        .map_err(|_| LineError::BadTimestamp(raw))?;

    Ok(Event {
        client_id: ip.to_string(),
        timestamp,
        entry_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edgar_columns() -> Columns {
        Columns {
            ip: 0,
            date: 1,
            time: 2,
        }
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        let result = parse_line("101.81.133.7,2017-06-30", &edgar_columns(), 0);
        assert_eq!(
            result.unwrap_err(),
            LineError::TooFewFields { expected: 3, got: 2 }
        );
    }

    #[test]
    fn test_parse_line_empty_ip() {
        let result = parse_line(",2017-06-30,00:00:00", &edgar_columns(), 0);
        assert_eq!(result.unwrap_err(), LineError::EmptyClient);
    }

    #[test]
    fn test_parse_line_bad_timestamp() {
        let result = parse_line("101.81.133.7,2017-06-30,25:99:00", &edgar_columns(), 0);
        assert!(matches!(result.unwrap_err(), LineError::BadTimestamp(_)));
    }

    #[test]
    fn test_parse_line_ignores_trailing_columns() {
        let event = parse_line(
            "101.81.133.7,2017-06-30,00:00:00,1608552.0,-index.htm",
            &edgar_columns(),
            7,
        )
        .unwrap();
        assert_eq!(event.client_id, "101.81.133.7");
        assert_eq!(event.entry_order, 7);
    }
}
