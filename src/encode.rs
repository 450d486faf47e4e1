//! Binary encoder: `Value x TypeInfo -> bytes`.
//!
//! Every successful output is length-prefixed: a big-endian `i32` length
//! followed by that many payload bytes, with `-1` reserved for `NULL`.
//! Dispatch happens on `type_info.typesend`; each `Value` variant first
//! checks that the descriptor's send function is one it accepts.

use crate::error::{Error, Result};
use crate::names;
use crate::temporal;
use crate::type_info::TypeInfo;
use crate::value::{Offset, Time, Timestamp, Value};
use crate::wire;

/// Encodes `value` for `type_info`, returning the length-prefixed wire bytes.
pub fn encode(value: &Value, type_info: &TypeInfo) -> Result<Vec<u8>> {
    tracing::trace!(typesend = %type_info.typesend, "encoding value");
    let mut buf = Vec::new();
    match value {
        Value::Null => wire::write_null(&mut buf),
        Value::Bool(b) => encode_bool(&mut buf, *b, type_info)?,
        Value::Int(n) => encode_int(&mut buf, *n, type_info)?,
        Value::Float(f) => encode_float(&mut buf, *f, type_info)?,
        Value::Text(s) => encode_text(&mut buf, s, type_info)?,
        Value::Bytea(b) => encode_bytea(&mut buf, b, type_info)?,
        Value::Uuid(b) => encode_uuid(&mut buf, b, type_info)?,
        Value::Date(d) => encode_date(&mut buf, d.year, d.month, d.day, type_info)?,
        Value::Time(t) => encode_time(&mut buf, t, type_info)?,
        Value::Timestamp(ts) => encode_timestamp(&mut buf, *ts, type_info)?,
        Value::Timestamptz(ts, offset) => encode_timestamptz(&mut buf, *ts, *offset, type_info)?,
        Value::Interval(iv) => encode_interval(&mut buf, iv, type_info)?,
        Value::Array(items) => encode_array(&mut buf, items, type_info)?,
    }
    Ok(buf)
}

fn encode_bool(buf: &mut Vec<u8>, value: bool, type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::BOOL_SEND {
        return Err(Error::mismatch(names::BOOL_SEND, &type_info.typesend));
    }
    wire::write_i32(buf, 1);
    wire::write_u8(buf, if value { 1 } else { 0 });
    Ok(())
}

fn encode_int(buf: &mut Vec<u8>, value: i64, type_info: &TypeInfo) -> Result<()> {
    match type_info.typesend.as_str() {
        names::OID_SEND => {
            let v = u32::try_from(value).map_err(|_| Error::OutOfRange("oid"))?;
            wire::write_i32(buf, 4);
            wire::write_u32(buf, v);
        }
        names::INT2_SEND => {
            let v = i16::try_from(value).map_err(|_| Error::OutOfRange("int2"))?;
            wire::write_i32(buf, 2);
            wire::write_i16(buf, v);
        }
        names::INT4_SEND => {
            let v = i32::try_from(value).map_err(|_| Error::OutOfRange("int4"))?;
            wire::write_i32(buf, 4);
            wire::write_i32(buf, v);
        }
        names::INT8_SEND => {
            wire::write_i32(buf, 8);
            wire::write_i64(buf, value);
        }
        other => return Err(Error::mismatch_int(value, other)),
    }
    Ok(())
}

fn encode_float(buf: &mut Vec<u8>, value: f64, type_info: &TypeInfo) -> Result<()> {
    match type_info.typesend.as_str() {
        names::FLOAT4_SEND => {
            wire::write_i32(buf, 4);
            wire::write_f32(buf, value as f32);
        }
        names::FLOAT8_SEND => {
            wire::write_i32(buf, 8);
            wire::write_f64(buf, value);
        }
        _ => return Err(Error::unsupported_float()),
    }
    Ok(())
}

fn encode_text(buf: &mut Vec<u8>, value: &str, type_info: &TypeInfo) -> Result<()> {
    let accepted = matches!(
        type_info.typesend.as_str(),
        names::VARCHAR_SEND | names::TEXT_SEND | names::CHAR_SEND | names::NAME_SEND
    );
    if !accepted {
        return Err(Error::mismatch_text(value, &type_info.typesend));
    }
    wire::write_framed(buf, value.as_bytes());
    Ok(())
}

fn encode_bytea(buf: &mut Vec<u8>, value: &[u8], type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::BYTEA_SEND {
        return Err(Error::mismatch(names::BYTEA_SEND, &type_info.typesend));
    }
    wire::write_framed(buf, value);
    Ok(())
}

fn encode_uuid(buf: &mut Vec<u8>, value: &[u8; 16], type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::UUID_SEND {
        return Err(Error::mismatch(names::UUID_SEND, &type_info.typesend));
    }
    if value.len() != 16 {
        return Err(Error::Shape("Invalid UUID".to_owned()));
    }
    wire::write_framed(buf, value);
    Ok(())
}

fn encode_date(buf: &mut Vec<u8>, year: i32, month: u8, day: u8, type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::DATE_SEND {
        return Err(Error::mismatch(names::DATE_SEND, &type_info.typesend));
    }
    let days = temporal::date_to_gregorian_days(year, month, day)? - temporal::POSTGRES_GD_EPOCH;
    wire::write_i32(buf, 4);
    wire::write_i32(buf, days);
    Ok(())
}

fn time_to_micros(time: &Time) -> i64 {
    (time.hours as i64) * 3_600_000_000
        + (time.minutes as i64) * 60_000_000
        + (time.seconds as i64) * 1_000_000
        + (time.nanoseconds as i64) / 1000
}

fn encode_time(buf: &mut Vec<u8>, time: &Time, type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::TIME_SEND {
        return Err(Error::mismatch(names::TIME_SEND, &type_info.typesend));
    }
    wire::write_i32(buf, 8);
    wire::write_i64(buf, time_to_micros(time));
    Ok(())
}

/// Microseconds since the PostgreSQL epoch for a Unix-epoch `Timestamp`.
fn timestamp_to_pg_micros(ts: Timestamp) -> i64 {
    (ts.seconds - temporal::UNIX_TO_PG_SECONDS) * 1_000_000 + ts.nanoseconds / 1000
}

fn encode_timestamp(buf: &mut Vec<u8>, ts: Timestamp, type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::TIMESTAMP_SEND {
        return Err(Error::mismatch(names::TIMESTAMP_SEND, &type_info.typesend));
    }
    wire::write_i32(buf, 8);
    wire::write_i64(buf, timestamp_to_pg_micros(ts));
    Ok(())
}

/// Reproduces the source's offset-to-minutes conversion verbatim (see
/// `SPEC_FULL.md` Open Question 1): `sign` flips on the sign of `hours`
/// only, so a positive-hour offset yields a *negative* minute count and
/// vice versa; the sign of `minutes` is ignored.
fn timestamptz_offset_minutes(offset: Offset) -> i64 {
    let sign: i64 = if offset.hours < 0 { 1 } else { -1 };
    ((offset.hours.unsigned_abs() as i64) * 60 + offset.minutes as i64) * sign
}

fn encode_timestamptz(
    buf: &mut Vec<u8>,
    ts: Timestamp,
    offset: Offset,
    type_info: &TypeInfo,
) -> Result<()> {
    if type_info.typesend != names::TIMESTAMPTZ_SEND {
        return Err(Error::mismatch(
            names::TIMESTAMPTZ_SEND,
            &type_info.typesend,
        ));
    }
    let shifted_seconds = ts.seconds + timestamptz_offset_minutes(offset) * 60;
    let shifted = Timestamp::new(shifted_seconds, ts.nanoseconds);
    wire::write_i32(buf, 8);
    wire::write_i64(buf, timestamp_to_pg_micros(shifted));
    Ok(())
}

fn encode_interval(
    buf: &mut Vec<u8>,
    iv: &crate::interval::Interval,
    type_info: &TypeInfo,
) -> Result<()> {
    if type_info.typesend != names::INTERVAL_SEND {
        return Err(Error::mismatch(names::INTERVAL_SEND, &type_info.typesend));
    }
    let micros = iv.seconds * 1_000_000 + iv.microseconds;
    wire::write_i32(buf, 16);
    wire::write_i64(buf, micros);
    wire::write_i32(buf, iv.days);
    wire::write_i32(buf, iv.months);
    Ok(())
}

fn encode_array(buf: &mut Vec<u8>, items: &[Value], type_info: &TypeInfo) -> Result<()> {
    if type_info.typesend != names::ARRAY_SEND {
        return Err(Error::mismatch(names::ARRAY_SEND, &type_info.typesend));
    }
    let elem_type = type_info
        .elem_type
        .as_deref()
        .ok_or_else(|| Error::Shape("Missing elem type info".to_owned()))?;

    let dims = Value::Array(items.to_vec()).arr_dims();
    let mut encoded_elements = Vec::with_capacity(items.len());
    collect_elements(items, elem_type, &mut encoded_elements)?;

    let null_marker = wire::null_marker();
    let has_nulls = encoded_elements
        .iter()
        .any(|e| e.as_slice() == null_marker);

    let mut payload = Vec::new();
    wire::write_i32(&mut payload, dims.len() as i32);
    wire::write_i32(&mut payload, if has_nulls { 1 } else { 0 });
    wire::write_u32(&mut payload, elem_type.oid);
    for dim_len in &dims {
        wire::write_i32(&mut payload, *dim_len as i32);
        wire::write_i32(&mut payload, 1);
    }
    for element in &encoded_elements {
        payload.extend_from_slice(element);
    }

    wire::write_framed(buf, &payload);
    Ok(())
}

/// Recurses through a (possibly nested) element list, encoding every leaf
/// `Value` with `elem_type` and flattening the results into `out` in
/// stream order, matching the element-body order the wire format expects.
fn collect_elements(items: &[Value], elem_type: &TypeInfo, out: &mut Vec<Vec<u8>>) -> Result<()> {
    for item in items {
        match item {
            Value::Array(inner) => collect_elements(inner, elem_type, out)?,
            other => out.push(encode(other, elem_type)?),
        }
    }
    Ok(())
}
