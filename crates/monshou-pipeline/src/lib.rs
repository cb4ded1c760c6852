//! monshou-pipeline: Pure icon generation core (sans-IO).
//!
//! Turns a numeric seed into a vector icon and provides the two judgment
//! functions the catalog builder runs on serialized markup:
//! seed -> figure (geometry generators over a seeded PRNG), markup ->
//! fingerprint (structural dedup key), markup -> valid/invalid.
//!
//! This crate has **no I/O dependencies** -- it maps values to values.
//! Serialization to SVG lives in `monshou-export`; catalog state and file
//! handling live in `monshou-catalog`.

pub mod fingerprint;
pub mod generate;
mod markup;
pub mod rng;
pub mod shape;
pub mod validate;

pub use fingerprint::{fingerprint, fingerprint_literal};
pub use generate::{FAMILY_COUNT, PatternFamily, family_for_seed, generate};
pub use rng::{SeedStream, draw};
pub use shape::{CANVAS_SIZE, Element, Figure, Paint, PathCommand, Point, SAFE_MAX, SAFE_MIN};
pub use validate::is_valid;
