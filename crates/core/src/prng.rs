//! Deterministic PRNG based on a 64-bit linear congruential generator.
//!
//! Drives the permutation-table shuffle of every seeded generator. Same seed
//! always produces the same sequence of values on every platform: the core
//! recurrence is pure wrapping integer arithmetic.

/// A source of raw 64-bit pseudo-random values.
///
/// [`PermutationTable::shuffled`](crate::permutation::PermutationTable::shuffled)
/// accepts any implementation, so tests can drive the shuffle with a fixed
/// sequence instead of [`Lcg64`].
pub trait RandomSource {
    /// Advances the source and returns the next 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a value in `[0, bound)` by modulo reduction of `next_u64()`.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is 0 (division by zero in modulo).
    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// 64-bit LCG: `state = state * MULTIPLIER + INCREMENT (mod 2^64)`.
///
/// The modulus is the overflow of `u64` itself, so both operations must wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Multiplier of the recurrence (Knuth's MMIX constant).
    pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    /// Increment of the recurrence.
    pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Creates a new generator whose initial state is `seed`.
    ///
    /// Unlike xorshift there is no degenerate seed: 0 is a valid starting
    /// state because the increment is odd.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates a generator from a signed seed. Negative seeds wrap to their
    /// two's-complement `u64` value (`-1` becomes `u64::MAX`).
    pub fn from_signed(seed: i64) -> Self {
        Self::new(seed as u64)
    }
}

impl RandomSource for Lcg64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}
