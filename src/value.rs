//! RESP Value

use crate::parser::parse_resp_value;
use std::vec::Vec;
use thiserror::Error;

/// A decode failure. Every kind is terminal for the `parse` call that
/// produced it; a malformed byte anywhere in a nested structure fails the
/// whole top-level decode.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("input ended before the value was complete")]
    TruncatedInput,
    #[error("unknown type prefix")]
    InvalidPrefix,
    #[error("line does not end with CRLF")]
    MalformedTerminator,
    #[error("length field is not a valid length")]
    InvalidLength,
}

pub type Slice<'a> = &'a [u8];

/// Represents a RESP value, see [Redis Protocol specification](http://redis.io/topics/protocol).
///
/// Payloads borrow from the buffer they were decoded from and never include
/// the CRLF that delimited them on the wire. `Integer` keeps the raw decimal
/// digits; callers that want a number convert themselves.
#[derive(Debug, PartialEq)]
pub enum Value<'a> {
    SimpleString(Slice<'a>),
    Error(Slice<'a>),
    Integer(Slice<'a>),
    BulkString(Option<Slice<'a>>),
    Array(Option<Vec<Value<'a>>>),
}

impl<'a> Value<'a> {
    /// Decodes one value from the front of `buf`, returning it together with
    /// the not yet consumed rest of the buffer.
    /// # Examples
    /// ```
    /// # use self::resp_decode::Value;
    /// let (left, val) = Value::parse(b"+OK\r\n:42\r\n").unwrap();
    /// assert_eq!(val, Value::SimpleString(b"OK"));
    /// assert_eq!(left, b":42\r\n");
    /// ```
    pub fn parse(buf: Slice) -> Result<(Slice, Value), DecodeError> {
        match parse_resp_value(buf) {
            Ok(v) => Ok(v),
            Err(nom::Err::Incomplete(_)) => Err(DecodeError::TruncatedInput),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
        }
    }

    /// Returns `true` if the value is a `Null` or `NullArray`. Returns `false` otherwise.
    /// # Examples
    /// ```
    /// # use self::resp_decode::Value;
    /// assert_eq!(Value::Array(None).is_null(), true);
    /// assert_eq!(Value::BulkString(None).is_null(), true);
    /// assert_eq!(Value::Integer(b"123").is_null(), false);
    /// ```
    pub fn is_null(&self) -> bool {
        match *self {
            Value::Array(None) | Value::BulkString(None) => true,
            _ => false,
        }
    }

    /// Returns `true` if the value is a `Error`. Returns `false` otherwise.
    /// # Examples
    /// ```
    /// # use self::resp_decode::Value;
    /// assert_eq!(Value::SimpleString(b"aa").is_error(), false);
    /// assert_eq!(Value::Error(b"").is_error(), true);
    /// ```
    pub fn is_error(&self) -> bool {
        match *self {
            Value::Error(_) => true,
            _ => false,
        }
    }

    /// The one-byte wire tag for this variant.
    /// # Examples
    /// ```
    /// # use self::resp_decode::Value;
    /// assert_eq!(Value::BulkString(None).prefix(), b'$');
    /// assert_eq!(Value::Array(None).prefix(), b'*');
    /// ```
    pub fn prefix(&self) -> u8 {
        match *self {
            Value::SimpleString(_) => b'+',
            Value::Error(_) => b'-',
            Value::Integer(_) => b':',
            Value::BulkString(_) => b'$',
            Value::Array(_) => b'*',
        }
    }
}
