//! Charset declaration detection over decoded text and raw byte buffers
//!
//! A SHIORI message announces its own encoding in-band, as a header line of
//! the form `Charset: Shift_JIS` terminated by CR LF. Detection therefore has
//! to work in two representations: on decoded text (before a request is
//! encoded for the plugin) and on raw bytes (a plugin response whose encoding
//! is exactly what we do not know yet). The header name and punctuation are
//! guaranteed ASCII in every supported charset, which is what makes the
//! byte-level scan sound.
//!
//! Both detectors are pure functions. They never fail: a missing or
//! unrecognized declaration is [`CharsetTag::Auto`], a normal value.

use crate::CharsetTag;

/// Header pattern for the byte-level scan: line break, header name, colon,
/// exactly one space. The leading `\n` anchors the header to the start of a
/// line so that a `Charset:` literal embedded inside a value field is never
/// mistaken for the real declaration.
const HEADER_PATTERN: &[u8; 10] = b"\ncharset: ";

/// Case-insensitive header-name prefix used by the text-mode scan.
const HEADER_NAME: &str = "charset: ";

/// Detect the declared charset of a decoded text message.
///
/// Scans for the first line (after a line break) beginning with the
/// case-insensitive header name `Charset:` followed by one space; the value
/// runs up to, but excluding, the first CR or LF. Only the first such header
/// is honored. Returns [`CharsetTag::Auto`] when no header is present.
pub fn from_text(message: &str) -> CharsetTag {
    let mut rest = message;
    while let Some(nl) = rest.find('\n') {
        rest = &rest[nl + 1..];
        if let Some(value) = header_value(rest) {
            return CharsetTag::resolve(value);
        }
    }
    CharsetTag::Auto
}

/// Detect the declared charset of a raw byte buffer.
///
/// A linear single-pass automaton matches [`HEADER_PATTERN`] against the
/// buffer. Alphabetic pattern positions compare case-insensitively by forcing
/// the 0x20 ASCII lowercase bit on the input byte; the punctuation positions
/// compare exactly. On a mismatch the cursor resets and the mismatching byte
/// is re-examined as a potential line break. This is a naive restart, not a
/// failure function, which is fine for a fixed 10-byte pattern whose only
/// self-overlapping prefix is the line break itself.
///
/// After a full pattern match the value bytes are collected verbatim until a
/// CR byte or the end of the buffer, decoded as ASCII, and resolved. The
/// value's own case is left to the resolution table.
pub fn from_bytes(message: &[u8]) -> CharsetTag {
    let mut cursor = 0usize;
    let mut i = 0usize;
    while i < message.len() {
        let expected = HEADER_PATTERN[cursor];
        let byte = if expected.is_ascii_lowercase() {
            message[i] | 0x20
        } else {
            message[i]
        };
        if byte == expected {
            cursor += 1;
            if cursor == HEADER_PATTERN.len() {
                return resolve_value_bytes(&message[i + 1..]);
            }
        } else if cursor != 0 {
            cursor = 0;
            continue; // re-examine this byte as a potential line break
        }
        i += 1;
    }
    CharsetTag::Auto
}

/// Match one candidate line against the header name; on success return the
/// declared value (everything up to the first CR or LF, possibly empty).
fn header_value(line: &str) -> Option<&str> {
    let (name, value) = line.split_at_checked(HEADER_NAME.len())?;
    if !name.eq_ignore_ascii_case(HEADER_NAME) {
        return None;
    }
    let end = value.find(['\r', '\n']).unwrap_or(value.len());
    Some(&value[..end])
}

fn resolve_value_bytes(rest: &[u8]) -> CharsetTag {
    let end = rest.iter().position(|&b| b == 0x0D).unwrap_or(rest.len());
    // Values are ASCII charset names; anything else resolves to Auto anyway.
    match std::str::from_utf8(&rest[..end]) {
        Ok(value) => CharsetTag::resolve(value),
        Err(_) => CharsetTag::Auto,
    }
}
