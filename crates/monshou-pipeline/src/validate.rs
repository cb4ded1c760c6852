//! Validity rules for serialized icons.
//!
//! The checker runs over markup text (not figures) so it can audit catalog
//! records from any source. Rules apply in order and short-circuit:
//! non-finite sentinels, empty path payloads, then absolute coordinates
//! outside the canonical viewport.

use crate::markup::{self, PathToken};
use crate::shape::CANVAS_SIZE;

/// Non-finite tokens that can leak into markup from a broken generator.
const NON_FINITE_SENTINELS: [&str; 3] = ["NaN", "Infinity", "inf"];

/// Whether the markup satisfies every validity rule.
///
/// 1. No non-finite sentinel (`NaN`, `Infinity`, `inf`) anywhere.
/// 2. No `d` attribute with an empty payload. Markup with no `d` attribute
///    at all is fine: primitive elements carry no command payload.
/// 3. Every numeric token following an absolute command letter
///    (`M L H V C S Q T A`) parses finite and lies in `[0, 24]`. Tokens
///    following relative command letters are offsets and skip the range
///    check.
#[must_use]
pub fn is_valid(svg: &str) -> bool {
    if NON_FINITE_SENTINELS.iter().any(|s| svg.contains(s)) {
        return false;
    }
    for payload in markup::path_payloads(svg) {
        if payload.trim().is_empty() {
            return false;
        }
        if !payload_in_bounds(payload) {
            return false;
        }
    }
    true
}

fn payload_in_bounds(payload: &str) -> bool {
    // Tokens before any command letter are treated as absolute; generated
    // payloads always open with `M` so the default rarely matters.
    let mut absolute = true;
    for token in markup::path_tokens(payload) {
        match token {
            PathToken::Command(c) => absolute = c.is_ascii_uppercase(),
            PathToken::Number(text) => {
                let Ok(value) = text.parse::<f64>() else {
                    return false;
                };
                if !value.is_finite() {
                    return false;
                }
                if absolute && !(0.0..=CANVAS_SIZE).contains(&value) {
                    return false;
                }
            }
        }
    }
    true
}
