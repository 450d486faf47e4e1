//! Big-endian byte buffer primitives shared by [`crate::encode`] and [`crate::decode`].
//!
//! PostgreSQL's binary wire format is entirely big-endian with signed
//! 32-bit length prefixes; `-1` denotes `NULL`. Centralizing the
//! read/write helpers here keeps the encoder and decoder free of raw byte
//! arithmetic.

use crate::error::{Error, Result};

/// Sentinel length prefix for `NULL`.
pub const NULL_LENGTH: i32 = -1;

/// Appends a length-prefixed payload: a big-endian `i32` length followed by `body`.
pub fn write_framed(buf: &mut Vec<u8>, body: &[u8]) {
    write_i32(buf, body.len() as i32);
    buf.extend_from_slice(body);
}

/// Appends the four-byte `NULL` length marker with no payload.
pub fn write_null(buf: &mut Vec<u8>) {
    write_i32(buf, NULL_LENGTH);
}

/// Returns the four raw bytes PostgreSQL uses to mark a `NULL` length prefix.
pub fn null_marker() -> [u8; 4] {
    NULL_LENGTH.to_be_bytes()
}

pub fn write_u8(buf: &mut Vec<u8>, v: u8) {
    buf.push(v);
}

pub fn write_i16(buf: &mut Vec<u8>, v: i16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn write_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn write_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn write_i64(buf: &mut Vec<u8>, v: i64) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn write_f32(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

pub fn write_f64(buf: &mut Vec<u8>, v: f64) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Reads a fixed-width field, reporting `frame` as the error kind on a length mismatch.
fn read_exact<const N: usize>(bytes: &[u8], frame: &'static str) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| Error::Frame(frame))
}

pub fn read_u8(bytes: &[u8], frame: &'static str) -> Result<u8> {
    let arr: [u8; 1] = read_exact(bytes, frame)?;
    Ok(arr[0])
}

pub fn read_i16(bytes: &[u8], frame: &'static str) -> Result<i16> {
    Ok(i16::from_be_bytes(read_exact(bytes, frame)?))
}

pub fn read_u32(bytes: &[u8], frame: &'static str) -> Result<u32> {
    Ok(u32::from_be_bytes(read_exact(bytes, frame)?))
}

pub fn read_i32(bytes: &[u8], frame: &'static str) -> Result<i32> {
    Ok(i32::from_be_bytes(read_exact(bytes, frame)?))
}

pub fn read_i64(bytes: &[u8], frame: &'static str) -> Result<i64> {
    Ok(i64::from_be_bytes(read_exact(bytes, frame)?))
}

pub fn read_f32(bytes: &[u8], frame: &'static str) -> Result<f32> {
    Ok(f32::from_be_bytes(read_exact(bytes, frame)?))
}

pub fn read_f64(bytes: &[u8], frame: &'static str) -> Result<f64> {
    Ok(f64::from_be_bytes(read_exact(bytes, frame)?))
}

/// A forward-only cursor over a byte slice, used to parse array headers and
/// element streams without tracking an explicit offset at each call site.
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Takes the next `n` bytes, advancing the cursor.
    pub fn take(&mut self, n: usize, frame: &'static str) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::Frame(frame))?;
        let slice = self.bytes.get(self.pos..end).ok_or(Error::Frame(frame))?;
        self.pos = end;
        Ok(slice)
    }

    pub fn read_i32(&mut self, frame: &'static str) -> Result<i32> {
        let slice = self.take(4, frame)?;
        read_i32(slice, frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_framed_prefixes_length() {
        let mut buf = Vec::new();
        write_framed(&mut buf, &[1, 2, 3]);
        assert_eq!(buf, vec![0, 0, 0, 3, 1, 2, 3]);
    }

    #[test]
    fn write_null_is_minus_one() {
        let mut buf = Vec::new();
        write_null(&mut buf);
        assert_eq!(buf, vec![0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn null_marker_matches_write_null() {
        let mut buf = Vec::new();
        write_null(&mut buf);
        assert_eq!(buf.as_slice(), null_marker());
    }

    #[test]
    fn read_rejects_wrong_length() {
        assert!(read_i32(&[0, 0, 0], "int4").is_err());
        assert_eq!(read_i32(&[0, 0, 0, 1], "int4").unwrap(), 1);
    }

    #[test]
    fn cursor_reads_sequential_fields() {
        let bytes = [0, 0, 0, 1, 0, 0, 0, 2];
        let mut cur = Cursor::new(&bytes);
        assert_eq!(cur.read_i32("x").unwrap(), 1);
        assert_eq!(cur.read_i32("x").unwrap(), 2);
        assert!(cur.is_empty());
    }

    #[test]
    fn cursor_errors_on_short_take() {
        let bytes = [0, 0];
        let mut cur = Cursor::new(&bytes);
        assert!(cur.take(4, "x").is_err());
    }
}
