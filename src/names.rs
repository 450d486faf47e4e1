//! `typsend`/`typreceive` function name constants used as dispatch keys.
//!
//! These mirror the C function names PostgreSQL's catalog records in
//! `pg_proc` for each type's binary send/receive functions — the same role
//! the teacher's `protocol::types::oid` module plays for numeric OIDs.

pub const BOOL_SEND: &str = "boolsend";
pub const BOOL_RECV: &str = "boolrecv";

pub const OID_SEND: &str = "oidsend";
pub const OID_RECV: &str = "oidrecv";

pub const INT2_SEND: &str = "int2send";
pub const INT2_RECV: &str = "int2recv";

pub const INT4_SEND: &str = "int4send";
pub const INT4_RECV: &str = "int4recv";

pub const INT8_SEND: &str = "int8send";
pub const INT8_RECV: &str = "int8recv";

pub const FLOAT4_SEND: &str = "float4send";
pub const FLOAT4_RECV: &str = "float4recv";

pub const FLOAT8_SEND: &str = "float8send";
pub const FLOAT8_RECV: &str = "float8recv";

pub const VARCHAR_SEND: &str = "varcharsend";
pub const VARCHAR_RECV: &str = "varcharrecv";

pub const TEXT_SEND: &str = "textsend";
pub const TEXT_RECV: &str = "textrecv";

pub const CHAR_SEND: &str = "charsend";
pub const CHAR_RECV: &str = "charrecv";

pub const NAME_SEND: &str = "namesend";
pub const NAME_RECV: &str = "namerecv";

pub const BYTEA_SEND: &str = "byteasend";
pub const BYTEA_RECV: &str = "bytearecv";

pub const UUID_SEND: &str = "uuid_send";
pub const UUID_RECV: &str = "uuid_recv";

pub const DATE_SEND: &str = "date_send";
pub const DATE_RECV: &str = "date_recv";

pub const TIME_SEND: &str = "time_send";
pub const TIME_RECV: &str = "time_recv";

pub const TIMESTAMP_SEND: &str = "timestamp_send";
pub const TIMESTAMP_RECV: &str = "timestamp_recv";

pub const TIMESTAMPTZ_SEND: &str = "timestamptz_send";
pub const TIMESTAMPTZ_RECV: &str = "timestamptz_recv";

pub const INTERVAL_SEND: &str = "interval_send";
pub const INTERVAL_RECV: &str = "interval_recv";

pub const ARRAY_SEND: &str = "array_send";
pub const ARRAY_RECV: &str = "array_recv";
