//! Lightweight scanning over serialized SVG markup.
//!
//! Both the fingerprint and the validity checker operate on markup strings
//! rather than on [`crate::shape::Figure`] values, because the catalog may
//! contain records produced by earlier tool versions whose figures no
//! longer round-trip. The scanners here are intentionally small: they only
//! need to find `d="…"` attribute payloads and split those payloads into
//! command letters and numeric tokens.

/// Extract every `d="…"` attribute payload from the markup, in order.
///
/// Only double-quoted attributes are recognized, which is the only form the
/// serializer emits. An unterminated attribute yields no payload for it.
pub(crate) fn path_payloads(svg: &str) -> Vec<&str> {
    let mut payloads = Vec::new();
    let mut rest = svg;
    while let Some(start) = rest.find(" d=\"") {
        let after = &rest[start + 4..];
        match after.find('"') {
            Some(end) => {
                payloads.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    payloads
}

/// One token of a path `d` payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PathToken<'a> {
    /// A single ASCII letter command (`M`, `l`, `A`, ...).
    Command(char),
    /// A numeric-looking run: digits, sign, dot, exponent characters, or a
    /// non-finite sentinel such as `NaN` or `Infinity`.
    Number(&'a str),
}

/// Split a `d` payload into command letters and numeric tokens.
///
/// Separators (whitespace and commas) are dropped. Sentinel words like
/// `NaN` and `Infinity` come out as `Number` tokens so callers can reject
/// them when they fail to parse finite.
pub(crate) fn path_tokens(payload: &str) -> Vec<PathToken<'_>> {
    let bytes = payload.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b.is_ascii_whitespace() || b == b',' {
            i += 1;
        } else if is_number_start(bytes, i) {
            let start = i;
            i += 1;
            while i < bytes.len() && is_number_continue(bytes, i) {
                i += 1;
            }
            tokens.push(PathToken::Number(&payload[start..i]));
        } else if b.is_ascii_alphabetic() {
            // A word like `NaN` or `Infinity` is one run, not a command
            // per letter.
            let start = i;
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word = &payload[start..i];
            if word.len() == 1 {
                tokens.push(PathToken::Command(char::from(b)));
            } else {
                tokens.push(PathToken::Number(word));
            }
        } else {
            // Stray byte; skip it rather than abort the scan.
            i += 1;
        }
    }
    tokens
}

fn is_number_start(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'0'..=b'9' | b'.' => true,
        b'-' | b'+' => bytes
            .get(i + 1)
            .is_some_and(|&n| n.is_ascii_digit() || n == b'.'),
        _ => false,
    }
}

fn is_number_continue(bytes: &[u8], i: usize) -> bool {
    match bytes[i] {
        b'0'..=b'9' | b'.' | b'e' | b'E' => true,
        // A sign continues the run only directly after an exponent marker;
        // elsewhere it starts the next number (`-2-3` is two tokens).
        b'-' | b'+' => matches!(bytes[i - 1], b'e' | b'E'),
        _ => false,
    }
}
