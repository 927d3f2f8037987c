//! Pure HTTP/1.1 response parsing over a fully buffered byte slice.
//!
//! The raw client reads each response to EOF before interpreting a single
//! byte, so parsing is a pure function over a buffer and can be tested
//! without a live socket. There is one head parser and two body modes:
//!
//! - **Text mode** decodes everything after the header delimiter as the
//!   body. Used for HTML pages.
//! - **Binary mode** recovers the body from the `Content-Length` header by
//!   taking that many bytes from the *tail* of the buffer. Image payloads
//!   may contain byte sequences indistinguishable from line terminators,
//!   so counting back from the end avoids any interaction between line
//!   scanning and the body bytes.
//!
//! # Examples
//!
//! ```rust
//! use imgrab::http::parse_text_response;
//!
//! let raw = b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\nhello";
//! let response = parse_text_response(raw).unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(response.connection(), Some("close"));
//! assert_eq!(response.body.as_deref(), Some("hello"));
//! ```

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Status line pattern: `<token> <token> <rest-of-line>`.
static STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+) (\S+) (.+)$").expect("status line pattern is valid"));

/// Header line pattern: `name: value`.
static HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?):\s*(.+)$").expect("header line pattern is valid"));

/// The first line of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Protocol version token, e.g. `HTTP/1.1`.
    pub version: String,
    /// Numeric status code.
    pub code: u16,
    /// Reason phrase, i.e. the rest of the line.
    pub reason: String,
}

impl StatusLine {
    /// Parse a status line.
    ///
    /// A line that does not match `<token> <numeric token> <rest>` is a
    /// hard [`Error::Protocol`] failure. There is no recovery: a malformed
    /// status line means the transport assumption is broken.
    pub fn parse(line: &str) -> Result<Self> {
        let caps = STATUS_LINE
            .captures(line)
            .ok_or_else(|| Error::Protocol(format!("invalid status line: {line:?}")))?;
        let code = caps[2]
            .parse::<u16>()
            .map_err(|_| Error::Protocol(format!("non-numeric status code in {line:?}")))?;
        Ok(Self {
            version: caps[1].to_string(),
            code,
            reason: caps[3].to_string(),
        })
    }
}

/// Ordered header map, terminated in the response by the first empty line.
///
/// Names are matched exactly as sent, without case normalization, and a
/// duplicate name overwrites the earlier value (last occurrence wins).
/// Multi-value headers are a known limitation, not a contract to extend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Insert a header, replacing the value of an existing entry with the
    /// same exact name while keeping its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a header by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no headers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the headers in the order they first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// A parsed HTTP response.
///
/// `body` is present only when the status code is in the 200-299 range;
/// on any other status the headers are still available so the caller can
/// report the `Connection` header regardless of success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
    /// Numeric status code from the status line.
    pub status: u16,
    /// Headers, in wire order.
    pub headers: Headers,
    /// The body, present only for a successful status.
    pub body: Option<T>,
}

impl<T> Response<T> {
    /// Whether the status code is in the 200-299 range.
    pub fn is_success(&self) -> bool {
        self.status / 100 == 2
    }

    /// Value of the `Connection` header, if the server sent one.
    pub fn connection(&self) -> Option<&str> {
        self.headers.get("Connection")
    }
}

/// Status line, headers, and the offset where the body starts.
struct ResponseHead {
    status_line: StatusLine,
    headers: Headers,
    body_offset: usize,
}

/// Read one line starting at `*pos`, advancing past the terminator.
///
/// Accepts both `\r\n` and bare `\n` line endings. Returns `None` at the
/// end of the buffer.
fn next_line(buf: &[u8], pos: &mut usize) -> Option<String> {
    if *pos >= buf.len() {
        return None;
    }
    let rest = &buf[*pos..];
    let (line, advance) = match rest.iter().position(|&b| b == b'\n') {
        Some(nl) => (&rest[..nl], nl + 1),
        None => (rest, rest.len()),
    };
    *pos += advance;
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Some(String::from_utf8_lossy(line).into_owned())
}

/// Parse the status line and headers, stopping at the first empty line.
///
/// Bytes after that line are never interpreted as headers. Header lines
/// that do not match `name: value` are skipped; like the link extractor,
/// malformed input yields less data rather than an error.
fn parse_head(buf: &[u8]) -> Result<ResponseHead> {
    let mut pos = 0;
    let first = next_line(buf, &mut pos)
        .ok_or_else(|| Error::Protocol("empty response".to_string()))?;
    let status_line = StatusLine::parse(&first)?;

    let mut headers = Headers::default();
    while let Some(line) = next_line(buf, &mut pos) {
        if line.is_empty() {
            break;
        }
        if let Some(caps) = HEADER_LINE.captures(&line) {
            headers.insert(&caps[1], &caps[2]);
        }
    }

    Ok(ResponseHead {
        status_line,
        headers,
        body_offset: pos,
    })
}

/// Parse a buffered response in text mode.
///
/// The body is every byte after the header delimiter, decoded as UTF-8
/// with replacement of invalid sequences, and is present only for a 2xx
/// status.
pub fn parse_text_response(buf: &[u8]) -> Result<Response<String>> {
    let head = parse_head(buf)?;
    let status = head.status_line.code;
    let body = (status / 100 == 2)
        .then(|| String::from_utf8_lossy(&buf[head.body_offset..]).into_owned());
    Ok(Response {
        status,
        headers: head.headers,
        body,
    })
}

/// Parse a buffered response in binary mode.
///
/// For a 2xx status the body is exactly the last `Content-Length` bytes of
/// the whole buffer (tail-anchored extraction); a missing, non-numeric, or
/// oversized `Content-Length` is an [`Error::Protocol`]. A non-2xx
/// response yields an absent body without consulting `Content-Length` at
/// all, since error pages frequently omit it.
pub fn parse_binary_response(buf: &[u8]) -> Result<Response<Vec<u8>>> {
    let head = parse_head(buf)?;
    let status = head.status_line.code;
    if status / 100 != 2 {
        return Ok(Response {
            status,
            headers: head.headers,
            body: None,
        });
    }

    let declared = head
        .headers
        .get("Content-Length")
        .ok_or_else(|| Error::Protocol("successful response without Content-Length".to_string()))?;
    let length = declared
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::Protocol(format!("invalid Content-Length: {declared:?}")))?;
    if length > buf.len() {
        return Err(Error::Protocol(format!(
            "Content-Length {length} exceeds the {} bytes received",
            buf.len()
        )));
    }

    let body = buf[buf.len() - length..].to_vec();
    Ok(Response {
        status,
        headers: head.headers,
        body: Some(body),
    })
}
