use super::value::{DecodeError, Slice, Value};
use nom::bytes::streaming::take;
use nom::character::streaming::crlf;
use nom::error::{ErrorKind, ParseError};
use nom::{Err, IResult, Needed};

type DecodeResult<'a, O> = IResult<Slice<'a>, O, DecodeError>;

// Only `crlf` and `take` build errors through this impl; `take` is
// streaming and can only come back Incomplete.
impl<'a> ParseError<Slice<'a>> for DecodeError {
    fn from_error_kind(_input: Slice<'a>, kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::CrLf => DecodeError::MalformedTerminator,
            _ => DecodeError::TruncatedInput,
        }
    }

    fn append(_input: Slice<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// One CRLF-terminated line: everything up to the first `\n`, which must be
/// preceded by `\r`. The payload excludes the terminator.
fn line(buf: Slice) -> DecodeResult<Slice> {
    let nl = match buf.iter().position(|&b| b == b'\n') {
        Some(i) => i,
        None => return Err(Err::Incomplete(Needed::Unknown)),
    };
    if nl < 1 || buf[nl - 1] != b'\r' {
        return Err(Err::Failure(DecodeError::MalformedTerminator));
    }
    Ok((&buf[nl + 1..], &buf[..nl - 1]))
}

/// A length line for bulk strings and arrays. -1 is the null marker; anything
/// below that, non-numeric, or overflowing i64 is rejected.
fn length(buf: Slice) -> DecodeResult<i64> {
    let (left, digits) = line(buf)?;
    let len = std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(Err::Failure(DecodeError::InvalidLength))?;
    if len < -1 {
        return Err(Err::Failure(DecodeError::InvalidLength));
    }
    Ok((left, len))
}

fn bulk_string(buf: Slice) -> DecodeResult<Option<Slice>> {
    let (left, len) = length(buf)?;
    if len < 0 {
        return Ok((left, None));
    }
    let (left, bulk_str) = take(len as usize)(left)?;
    let (left, _) = crlf(left)?;
    Ok((left, Some(bulk_str)))
}

fn array(buf: Slice) -> DecodeResult<Option<Vec<Value>>> {
    let (mut left, len) = length(buf)?;
    if len < 0 {
        return Ok((left, None));
    }
    // Cap the preallocation by what the buffer could still hold; the
    // smallest wire value is 3 bytes, so a larger claim only ever ends in
    // a decode error and must not reserve memory up front.
    let len = len as usize;
    let mut items = Vec::with_capacity(len.min(left.len() / 3 + 1));
    for _ in 0..len {
        let (rest, item) = resp_value(left)?;
        items.push(item);
        left = rest;
    }
    Ok((left, Some(items)))
}

fn resp_value(buf: Slice) -> DecodeResult<Value> {
    let (&prefix, left) = match buf.split_first() {
        Some(split) => split,
        None => return Err(Err::Incomplete(Needed::Size(1))),
    };
    match prefix {
        b'+' => {
            let (left, output) = line(left)?;
            Ok((left, Value::SimpleString(output)))
        }
        b'-' => {
            let (left, output) = line(left)?;
            Ok((left, Value::Error(output)))
        }
        b':' => {
            let (left, output) = line(left)?;
            Ok((left, Value::Integer(output)))
        }
        b'$' => {
            let (left, output) = bulk_string(left)?;
            Ok((left, Value::BulkString(output)))
        }
        b'*' => {
            let (left, output) = array(left)?;
            Ok((left, Value::Array(output)))
        }
        _ => Err(Err::Failure(DecodeError::InvalidPrefix)),
    }
}

pub fn parse_resp_value(buf: Slice) -> DecodeResult<Value> {
    resp_value(buf)
}
