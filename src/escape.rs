//! Escape-sequence decoding for already-isolated string bodies.
//!
//! The token rules capture string bodies with their escapes intact; this
//! module turns them into decoded text. Decoding is lenient: an escape that
//! doesn't parse keeps its backslash instead of failing the whole string.

use memchr::memchr;
use std::borrow::Cow;

/// Decode hex/unicode/octal/common escapes in a raw string body.
pub(crate) fn decode(input: &str) -> Cow<'_, str> {
    if memchr(b'\\', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len());
    let mut s = input;
    while let Some(i) = memchr(b'\\', s.as_bytes()) {
        out.push_str(&s[..i]);
        s = &s[i..];
        let consumed = decode_escape(s, &mut out);
        s = &s[consumed..];
    }
    out.push_str(s);
    Cow::Owned(out)
}

/// Decode the escape sequence at the start of `s` (which begins with a
/// backslash) into `out`, returning the number of bytes consumed.
fn decode_escape(s: &str, out: &mut String) -> usize {
    let rest = &s[1..];
    let Some(c) = rest.chars().next() else {
        // lone trailing backslash
        out.push('\\');
        return 1;
    };
    match c {
        '\'' | '"' | '\\' | '/' => {
            out.push(c);
            2
        }
        'b' => {
            out.push('\u{0008}');
            2
        }
        'f' => {
            out.push('\u{000C}');
            2
        }
        'n' => {
            out.push('\n');
            2
        }
        'r' => {
            out.push('\r');
            2
        }
        't' => {
            out.push('\t');
            2
        }
        'v' => {
            out.push('\u{000B}');
            2
        }
        '0'..='7' => {
            // up to three octal digits; `\0` is the zero-length-run special
            // case and decodes to NUL either way
            let digits: String = rest
                .chars()
                .take_while(|ch| ('0'..='7').contains(ch))
                .take(3)
                .collect();
            let code = u32::from_str_radix(&digits, 8).unwrap_or(0);
            out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
            1 + digits.len()
        }
        'u' => decode_unicode(s, out),
        'x' => match take_hex(&rest[1..], 2) {
            Some(code) => {
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                4
            }
            None => {
                out.push_str("\\x");
                2
            }
        },
        'U' => match take_hex(&rest[1..], 8) {
            Some(code) => {
                out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                10
            }
            None => {
                out.push_str("\\U");
                2
            }
        },
        _ => {
            // unrecognized escape, keep it verbatim
            out.push('\\');
            out.push(c);
            1 + c.len_utf8()
        }
    }
}

/// `\u{…}` and `\uXXXX`, with surrogate pairs combined and lone surrogates
/// replaced by U+FFFD (JS strings tolerate lone halves, Rust strings cannot).
fn decode_unicode(s: &str, out: &mut String) -> usize {
    let rest = &s[2..];
    if let Some(body) = rest.strip_prefix('{') {
        if let Some(end) = body.find('}') {
            if end > 0 && body[..end].bytes().all(|b| b.is_ascii_hexdigit()) {
                // cap at 8 digits; anything longer is not a code point
                if end <= 8 {
                    let code = u32::from_str_radix(&body[..end], 16).unwrap_or(u32::MAX);
                    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                    return 2 + 1 + end + 1;
                }
            }
        }
        out.push_str("\\u");
        return 2;
    }
    let Some(code) = take_hex(rest, 4) else {
        out.push_str("\\u");
        return 2;
    };
    if (0xD800..=0xDBFF).contains(&code) {
        // high surrogate: look for an immediately following low half
        let tail = &rest[4..];
        if let Some(after) = tail.strip_prefix("\\u") {
            if let Some(low) = take_hex(after, 4) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER));
                    return 12;
                }
            }
        }
        out.push(char::REPLACEMENT_CHARACTER);
        return 6;
    }
    out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
    6
}

/// Parse exactly `n` ASCII hex digits from the front of `s`.
fn take_hex(s: &str, n: usize) -> Option<u32> {
    let head = s.get(..n)?;
    if !head.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(head, 16).ok()
}
