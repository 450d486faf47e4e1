//! A binary wire-format codec for PostgreSQL values.
//!
//! This crate encodes [`Value`]s and decodes raw bytes exactly as
//! PostgreSQL's frontend/backend protocol does in `Bind` and `DataRow`
//! messages. It speaks the wire format only — it does not open sockets,
//! does not negotiate authentication, and does not look up catalog types;
//! callers supply a [`TypeInfo`] populated from their own `pg_type` query.
//!
//! # Example
//!
//! ```
//! use pg_binary_codec::{decode, encode, TypeInfo, Value};
//!
//! let int4 = TypeInfo::scalar(23, "int4", "int4send", "int4recv");
//! let bytes = encode::encode(&Value::Int(42), &int4).unwrap();
//! assert_eq!(bytes, vec![0, 0, 0, 4, 0, 0, 0, 42]);
//!
//! let dynamic = decode::decode(&bytes[4..], &int4).unwrap();
//! assert_eq!(dynamic.as_int(), Some(42));
//! ```

pub mod decode;
pub mod dynamic;
pub mod encode;
pub mod error;
pub mod interval;
pub mod literal;
mod names;
pub mod temporal;
pub mod type_info;
pub mod value;
pub mod wire;

pub use dynamic::Dynamic;
pub use error::{Error, Result};
pub use interval::Interval;
pub use type_info::TypeInfo;
pub use value::{Date, Offset, Time, Timestamp, Value};
