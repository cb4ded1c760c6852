//! Seeded pseudo-random number generation.
//!
//! Every geometry generator draws its parameters through [`draw`], a pure
//! function of a `(seed, offset)` pair. The same pair always yields the
//! same value, which is what makes a generated icon exactly reproducible
//! from its seed. The offset acts as a virtual stream index: one generator
//! invocation can request many independent-looking values by varying the
//! offset (0, 1, 2, ...) without holding any mutable state.
//!
//! The mixer is splitmix64-style: a Weyl step over the golden-ratio
//! increment followed by two xorshift-multiply rounds. Any deterministic
//! mixing scheme satisfies the contract; the integer mixer is portable and
//! has no platform-dependent floating-point transcendentals.

/// Weyl increment used by splitmix64 (2^64 / phi, rounded to odd).
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// 1 / 2^53, the scale that maps the top 53 bits of a `u64` onto `[0, 1)`.
const INV_2_POW_53: f64 = 1.0 / 9_007_199_254_740_992.0;

/// Map a `(seed, offset)` pair to a reproducible float in `[0, 1)`.
///
/// Pure and stateless: the same inputs always produce the same output, on
/// every platform.
#[must_use]
pub fn draw(seed: u64, offset: u64) -> f64 {
    let mut z = seed.wrapping_add(offset.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    // The top 53 bits fill an f64 mantissa exactly, so the result is an
    // evenly spaced value in [0, 1) with no rounding bias.
    #[allow(clippy::cast_precision_loss)]
    let mantissa = (z >> 11) as f64;
    mantissa * INV_2_POW_53
}

/// A seed with the [`draw`] offset left free.
///
/// Generators hold one of these and write `r.at(3)` instead of threading
/// the seed through every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedStream {
    seed: u64,
}

impl SeedStream {
    /// Bind a seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The float in `[0, 1)` at the given stream offset.
    #[must_use]
    pub fn at(self, offset: u64) -> f64 {
        draw(self.seed, offset)
    }

    /// A value in `[min, max)` drawn at the given offset.
    #[must_use]
    pub fn range(self, offset: u64, min: f64, max: f64) -> f64 {
        self.at(offset).mul_add(max - min, min)
    }

    /// An index in `0..bound` drawn at the given offset.
    ///
    /// Returns 0 when `bound` is 0.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn index(self, offset: u64, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        // at() < 1.0, so the product is strictly below bound.
        let idx = (self.at(offset) * bound as f64) as usize;
        idx.min(bound - 1)
    }

    /// An integer count in `min..=max` drawn at the given offset.
    #[must_use]
    pub fn count(self, offset: u64, min: usize, max: usize) -> usize {
        min + self.index(offset, max.saturating_sub(min) + 1)
    }
}
