use std::fs;

use chrono::NaiveDateTime;
use sessionize_core::SessionRecord;
use sessionize_ingest::write_sessions;
use tempfile::TempDir;

fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn record(client_id: &str, start: &str, end: &str, length_secs: i64, count: usize) -> SessionRecord {
    SessionRecord {
        client_id: client_id.to_string(),
        session_seq: 1,
        event_count: count,
        start_time: ts(start),
        true_end_time: ts(end),
        effective_end_time: ts(end),
        length_secs,
        first_entry_order: 0,
    }
}

#[test]
fn test_write_sessions_row_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessionization.txt");

    let records = vec![
        record("101.81.133.7", "2017-06-30 00:00:00", "2017-06-30 00:00:00", 1, 1),
        record("107.23.85.12", "2017-06-30 00:00:00", "2017-06-30 00:01:08", 69, 4),
    ];

    write_sessions(&path, &records).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "101.81.133.7,2017-06-30 00:00:00,2017-06-30 00:00:00,1,1\n\
         107.23.85.12,2017-06-30 00:00:00,2017-06-30 00:01:08,69,4\n"
    );
}

#[test]
fn test_write_sessions_empty_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessionization.txt");

    write_sessions(&path, &[]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_write_sessions_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sessionization.txt");
    fs::write(&path, "stale content\n").unwrap();

    let records = vec![record("10.0.0.1", "2017-06-30 01:00:00", "2017-06-30 01:00:00", 1, 1)];
    write_sessions(&path, &records).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "10.0.0.1,2017-06-30 01:00:00,2017-06-30 01:00:00,1,1\n");
}
