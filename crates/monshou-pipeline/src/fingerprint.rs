//! Structural fingerprinting of serialized icons.
//!
//! Two icons with the same command skeleton but different coordinates are
//! treated as the same template: the catalog builder deduplicates on the
//! skeleton, not on literal text, so "same shape, different numbers" never
//! inflates the catalog. [`fingerprint`] implements that policy.
//! [`fingerprint_literal`] is the stricter, coordinate-sensitive mode for
//! callers who want every numeric variation to count as distinct.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::markup::{self, PathToken};

/// Fixed hash keys. The fingerprint is a stable identifier persisted in the
/// catalog, so the keys can never change.
const KEY_0: u64 = 0x6d6f_6e73_686f_7521;
const KEY_1: u64 = 0x6963_6f6e_2d63_6174;

/// Structural fingerprint of serialized markup, as 16 lowercase hex digits.
///
/// Path payloads are reduced to their command skeleton: every numeric token
/// becomes the placeholder `N`, separators collapse to single spaces, and
/// the concatenated skeletons of all paths are hashed. Markup with no path
/// payload (primitive-only icons) hashes its whitespace-collapsed literal
/// text instead, so primitive geometry stays coordinate-sensitive.
#[must_use]
pub fn fingerprint(svg: &str) -> String {
    let payloads = markup::path_payloads(svg);
    if payloads.is_empty() {
        return fingerprint_literal(svg);
    }
    let mut skeleton = String::new();
    for payload in payloads {
        for token in markup::path_tokens(payload) {
            if !skeleton.is_empty() {
                skeleton.push(' ');
            }
            match token {
                PathToken::Command(c) => skeleton.push(c),
                PathToken::Number(_) => skeleton.push('N'),
            }
        }
    }
    digest(&skeleton)
}

/// Coordinate-sensitive fingerprint: the whole markup, whitespace-collapsed,
/// numbers preserved.
#[must_use]
pub fn fingerprint_literal(svg: &str) -> String {
    let collapsed: String = svg.split_whitespace().collect::<Vec<_>>().join(" ");
    digest(&collapsed)
}

fn digest(normalized: &str) -> String {
    let mut hasher = SipHasher13::new_with_keys(KEY_0, KEY_1);
    hasher.write(normalized.as_bytes());
    format!("{:016x}", hasher.finish())
}
