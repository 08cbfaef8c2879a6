//! Decoder for RESP(REdis Serialization Protocol) byte buffers.
//!
//! The decoder is a recursive-descent parser over one complete in-memory
//! buffer; it is not a streaming parser. See [`Value::parse`].

mod parser;
mod value;

pub use value::{DecodeError, Value};
