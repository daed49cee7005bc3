//! # Per-Position Base Support
//!
//! A [`BaseSupport`] is the vote tally for a single layout position. Every read covering the
//! position offers its base; the vote is only counted when the caller says the observation
//! qualifies (in practice, when the base quality meets the configured minimum).
//!
//! ## Tie-Breaking
//!
//! Counts are stored in a fixed-size array indexed in A, C, G, T order. The dominant base is the
//! first base, in that order, to reach the maximum count, so equal counts always resolve the same
//! way regardless of the order in which observations arrived.
//!
//! ## Edge Cases
//!
//! - N and other non-ACGT symbols are never counted.
//! - Lowercase bases are counted as their uppercase form.
//! - A cell with no counted observations has no dominant base; the layout decides how to render it.

use fglayout_dna::{DNA_BASE_COUNT, DNA_BASES, base_index};

/// Quality-gated tally of A, C, G and T observations at one position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BaseSupport {
    /// Count of counted observations for each base, in [`DNA_BASES`] order
    counts: [u32; DNA_BASE_COUNT],
}

impl BaseSupport {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation of `base`.
    ///
    /// The count for `base` is incremented only when `qualifies` is true; non-ACGT bases are
    /// ignored either way.
    #[inline]
    pub fn observe(&mut self, base: u8, qualifies: bool) {
        if !qualifies {
            return;
        }
        if let Some(idx) = base_index(base) {
            self.counts[idx] = self.counts[idx].saturating_add(1);
        }
    }

    /// Returns the base with the highest count, or `None` if nothing has been counted.
    ///
    /// Ties resolve to the earliest base in A, C, G, T order.
    #[must_use]
    pub fn dominant_base(&self) -> Option<u8> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((i, count)),
            }
        }
        best.map(|(i, _)| DNA_BASES[i])
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Returns true if no observation has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Returns the count for a specific base (0 for non-ACGT bases).
    #[must_use]
    pub fn count(&self, base: u8) -> u32 {
        base_index(base).map_or(0, |idx| self.counts[idx])
    }

    /// Returns the counts for all bases as [A, C, G, T]
    #[must_use]
    pub fn counts(&self) -> [u32; DNA_BASE_COUNT] {
        self.counts
    }

    /// Returns the non-zero `(base, count)` entries in A, C, G, T order.
    #[must_use]
    pub fn count_map(&self) -> Vec<(u8, u32)> {
        DNA_BASES
            .iter()
            .zip(self.counts.iter())
            .filter(|&(_, &count)| count > 0)
            .map(|(&base, &count)| (base, count))
            .collect()
    }

    /// Adds every count of `other` into this tally.
    pub fn add(&mut self, other: &BaseSupport) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine = mine.saturating_add(*theirs);
        }
    }
}
