use crate::http::query::QueryParams;
use crate::http::request::{Method, Request};
use crate::http::response::StatusCode;

/// Largest request head read from a connection. Anything past it is ignored.
pub const MAX_REQUEST_SIZE: usize = 8192;
/// Longest accepted method token.
pub const MAX_METHOD_LEN: usize = 16;
/// Longest accepted request target, query string included.
pub const MAX_TARGET_LEN: usize = 2048;

/// Reasons a request line is rejected. All of them map to 400 Bad Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No `\n` within the first `MAX_REQUEST_SIZE` bytes
    MissingLineTerminator,
    /// Request line is not valid UTF-8
    InvalidEncoding,
    /// No space after the method token
    MissingMethodSeparator,
    /// No space after the request target
    MissingTargetSeparator,
    EmptyMethod,
    MethodTooLong,
    TargetTooLong,
    /// Target is empty or not rooted at `/`
    InvalidTarget,
}

impl ParseError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BadRequest
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ParseError::MissingLineTerminator => "request line is not terminated",
            ParseError::InvalidEncoding => "request line is not valid UTF-8",
            ParseError::MissingMethodSeparator => "no space after method",
            ParseError::MissingTargetSeparator => "no space after request target",
            ParseError::EmptyMethod => "empty method",
            ParseError::MethodTooLong => "method too long",
            ParseError::TargetTooLong => "request target too long",
            ParseError::InvalidTarget => "request target must start with '/'",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses the request line at the start of `buf`.
///
/// Only the first line is examined: `METHOD SP target SP version`. The version
/// token and any header lines are ignored. The target is split on the first
/// `?`; the path is kept as-is and only the query is decoded.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let buf = &buf[..buf.len().min(MAX_REQUEST_SIZE)];

    let line_end = buf
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(ParseError::MissingLineTerminator)?;
    let line = buf[..line_end].strip_suffix(b"\r").unwrap_or(&buf[..line_end]);
    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;

    let (method, rest) = line
        .split_once(' ')
        .ok_or(ParseError::MissingMethodSeparator)?;
    if method.is_empty() {
        return Err(ParseError::EmptyMethod);
    }
    if method.len() > MAX_METHOD_LEN {
        return Err(ParseError::MethodTooLong);
    }

    let (target, _version) = rest
        .split_once(' ')
        .ok_or(ParseError::MissingTargetSeparator)?;
    if target.len() > MAX_TARGET_LEN {
        return Err(ParseError::TargetTooLong);
    }

    let (path, raw_query) = target.split_once('?').unwrap_or((target, ""));
    if !path.starts_with('/') {
        return Err(ParseError::InvalidTarget);
    }

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        query: QueryParams::parse(raw_query),
    })
}

/// Position just past the blank line ending the header block, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
        return Some(pos + 4);
    }
    buf.windows(2).position(|w| w == b"\n\n").map(|pos| pos + 2)
}
