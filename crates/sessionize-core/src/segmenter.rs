use std::collections::HashMap;

use crate::types::Event;

/// The member events of one session, in input order.
#[derive(Debug)]
pub struct SessionEvents<'a> {
    pub client_id: &'a str,
    pub session_seq: u32,
    pub events: Vec<&'a Event>,
}

/// Partition events into per-client sessions using the inactivity rule.
///
/// Events are grouped by client, preserving input order within each group.
/// A client's first event opens session 1; every later event whose gap to
/// its predecessor exceeds `inactivity_secs` (strictly, in whole seconds)
/// opens the next session. Gaps are computed against the immediately
/// preceding event in input order — the input is trusted to be
/// non-decreasing in time per client and is never re-sorted here.
pub fn segment(events: &[Event], inactivity_secs: i64) -> Vec<SessionEvents<'_>> {
    // Explicit grouping: client id -> append-ordered events. The side list
    // keeps group iteration deterministic across runs.
    let mut by_client: HashMap<&str, Vec<&Event>> = HashMap::new();
    let mut client_order: Vec<&str> = Vec::new();

    for event in events {
        by_client
            .entry(event.client_id.as_str())
            .or_insert_with(|| {
                client_order.push(event.client_id.as_str());
                Vec::new()
            })
            .push(event);
    }

    let mut sessions = Vec::new();

    for client_id in client_order {
        let client_events = &by_client[client_id];

        let mut current = SessionEvents {
            client_id,
            session_seq: 1,
            events: Vec::new(),
        };

        for &event in client_events {
            if let Some(previous) = current.events.last() {
                let idle_secs = event
                    .timestamp
                    .signed_duration_since(previous.timestamp)
                    .num_seconds();

                if idle_secs > inactivity_secs {
                    let next_seq = current.session_seq + 1;
                    sessions.push(std::mem::replace(
                        &mut current,
                        SessionEvents {
                            client_id,
                            session_seq: next_seq,
                            events: Vec::new(),
                        },
                    ));
                }
            }
            current.events.push(event);
        }

        if !current.events.is_empty() {
            sessions.push(current);
        }
    }

    sessions
}
