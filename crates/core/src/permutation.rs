//! Seeded permutation table shared by the lattice noise generators.
//!
//! The table holds the integers `0..=255` in shuffled order, duplicated to 512
//! entries so that a lookup at `i + 1` (or `i + j` for two bytes) never needs
//! an explicit wrap.

use crate::prng::{Lcg64, RandomSource};

/// Number of distinct entries in the permutation.
pub const PERMUTATION_SIZE: usize = 256;

/// A shuffled, duplicated permutation of `0..=255`. Immutable after
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    entries: [u8; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    /// Builds the table for `seed` by shuffling with an [`Lcg64`] seeded
    /// from it. Negative seeds wrap.
    pub fn from_seed(seed: i64) -> Self {
        let table = Self::shuffled(&mut Lcg64::from_signed(seed));
        tracing::debug!(
            seed,
            head = ?&table.entries[..8],
            "built permutation table"
        );
        table
    }

    /// Builds the table with a Fisher-Yates shuffle driven by `rng`.
    ///
    /// Walks from the last position down to 1; at position `i` draws
    /// `rng.next_u64() % (i + 1)` and swaps.
    pub fn shuffled<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut source = [0u8; PERMUTATION_SIZE];
        for (slot, value) in source.iter_mut().zip(0u8..=255) {
            *slot = value;
        }

        for i in (1..PERMUTATION_SIZE).rev() {
            let j = rng.next_below(i as u64 + 1) as usize;
            source.swap(i, j);
        }

        let mut entries = [0u8; PERMUTATION_SIZE * 2];
        entries[..PERMUTATION_SIZE].copy_from_slice(&source);
        entries[PERMUTATION_SIZE..].copy_from_slice(&source);
        Self { entries }
    }

    /// Returns the entry at `index`, which must be below 512.
    #[inline]
    pub fn get(&self, index: usize) -> usize {
        usize::from(self.entries[index])
    }

    /// Read-only view of all 512 entries.
    pub fn entries(&self) -> &[u8] {
        &self.entries
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.entries[..8])
            .finish_non_exhaustive()
    }
}
