//! Seeded permutation table backing gradient selection.

use crate::random::Random;

/// A 256-entry permutation of `[0, 255]`, mirrored to 512 entries.
///
/// The mirror lets corner lookups of the form `p[p[i] + j]` index past 255
/// without masking the inner sum. The table is a bijection on `[0, 255]` by
/// construction (Fisher-Yates over the identity sequence), which keeps
/// gradient selection uniformly distributed.
#[derive(Debug, Clone)]
pub(crate) struct PermutationTable {
    p: [u8; 512],
}

impl PermutationTable {
    /// Shuffle a fresh table from the given random source.
    pub(crate) fn shuffled<R: Random>(random: &mut R) -> Self {
        let mut p = [0u8; 512];
        for (i, val) in p.iter_mut().enumerate().take(256) {
            *val = i as u8;
        }

        for i in 0..256 {
            let offset = random.next_i32_bounded(256 - i as i32) as usize;
            p.swap(i, i + offset);
        }

        for i in 0..256 {
            p[i + 256] = p[i];
        }

        Self { p }
    }

    /// Look up an already-bounded index (`< 512`).
    #[inline]
    pub(crate) const fn get(&self, index: usize) -> usize {
        self.p[index] as usize
    }
}
