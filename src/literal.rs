//! Renders [`Value`]s as PostgreSQL-parseable SQL literals.
//!
//! This is a boundary helper for callers composing SQL text directly (e.g.
//! logging a query with its bound parameters inlined) — it is not part of
//! the binary wire path and does not participate in `Bind`/`DataRow`
//! framing.

use crate::value::{Date, Offset, Time, Timestamp, Value};

/// Renders `value` as a single PostgreSQL literal.
pub fn to_string(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_owned(),
        Value::Bool(true) => "TRUE".to_owned(),
        Value::Bool(false) => "FALSE".to_owned(),
        Value::Int(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Text(s) => format!("'{}'", s.replace('\'', "\\'")),
        Value::Bytea(bytes) => format!("'\\x{}'", hex_upper(bytes)),
        Value::Uuid(bytes) => format!("'{}'", uuid_string(bytes)),
        Value::Time(t) => format!("'{}'", time_string(t)),
        Value::Date(d) => format!("'{}'", date_string(d)),
        Value::Timestamp(ts) => format!("'{}'", timestamp_string(*ts)),
        Value::Timestamptz(ts, offset) => format!("'{}'", timestamptz_string(*ts, *offset)),
        Value::Interval(iv) => format!("'{}'", iv.to_iso8601_string()),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(to_string).collect();
            format!("ARRAY[{}]", rendered.join(", "))
        }
    }
}

fn hex_upper(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02X}"));
    }
    out
}

fn uuid_string(bytes: &[u8; 16]) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    )
}

fn date_string(d: &Date) -> String {
    format!("{:04}-{:02}-{:02}", d.year, d.month, d.day)
}

fn time_string(t: &Time) -> String {
    let milliseconds = t.nanoseconds / 1_000_000;
    if milliseconds == 0 {
        format!("{:02}:{:02}:{:02}", t.hours, t.minutes, t.seconds)
    } else {
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            t.hours, t.minutes, t.seconds, milliseconds
        )
    }
}

/// Renders an instant as RFC 3339 at UTC.
fn timestamp_string(ts: Timestamp) -> String {
    let datetime = time::OffsetDateTime::from_unix_timestamp(ts.seconds)
        .unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
        .replace_nanosecond(u32::try_from(ts.nanoseconds).unwrap_or(0))
        .unwrap_or(time::OffsetDateTime::UNIX_EPOCH);
    datetime
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

/// Adds the offset as a duration to the instant, then renders as `timestamp`.
///
/// Unlike the binary encoder's `timestamptz_send` path (see
/// `encode::timestamptz_offset_minutes`), this applies the offset with its
/// natural sign — the sign-flip quirk documented in `SPEC_FULL.md` Open
/// Question 1 is specific to the wire encoder, not this renderer.
fn timestamptz_string(ts: Timestamp, offset: Offset) -> String {
    let sign: i64 = if offset.hours < 0 { -1 } else { 1 };
    let shift_seconds = sign * (offset.hours.unsigned_abs() as i64 * 3600 + offset.minutes as i64 * 60);
    let shifted = Timestamp::new(ts.seconds + shift_seconds, ts.nanoseconds);
    timestamp_string(shifted)
}
