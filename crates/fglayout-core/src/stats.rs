//! Counts of what a [`crate::LayoutBuilder`] did with the reads offered to it.

use serde::{Deserialize, Serialize};

use crate::builder::MatchOutcome;

/// Read and layout counts accumulated by a layout builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutBuilderStats {
    /// Reads offered to an existing or empty layout
    pub reads_offered: u64,
    /// Reads absorbed into a layout
    pub reads_absorbed: u64,
    /// Reads rejected for sharing too few informative positions with the layout
    pub rejected_insufficient_overlap: u64,
    /// Reads rejected for a high-quality disagreement with the layout
    pub rejected_mismatch: u64,
    /// Layouts started from a single read
    pub layouts_seeded: u64,
    /// Layouts produced by merging two layouts
    pub layouts_merged: u64,
}

impl LayoutBuilderStats {
    /// Records why a read was not absorbed. Accepted outcomes are ignored.
    pub fn record_rejection(&mut self, outcome: &MatchOutcome) {
        match outcome {
            MatchOutcome::Accepted { .. } => {}
            MatchOutcome::InsufficientOverlap { .. } => self.rejected_insufficient_overlap += 1,
            MatchOutcome::Mismatch { .. } => self.rejected_mismatch += 1,
        }
    }

    /// Total number of rejected reads.
    #[must_use]
    pub fn total_rejected(&self) -> u64 {
        self.rejected_insufficient_overlap + self.rejected_mismatch
    }

    /// Fraction of offered reads that were absorbed (0.0 when nothing was offered).
    #[must_use]
    pub fn absorb_rate(&self) -> f64 {
        if self.reads_offered == 0 {
            0.0
        } else {
            #[expect(clippy::cast_precision_loss, reason = "read counts never exceed 2^53")]
            let rate = self.reads_absorbed as f64 / self.reads_offered as f64;
            rate
        }
    }

    /// Adds the counts of `other`, e.g. from a builder that ran on another thread.
    pub fn merge(&mut self, other: &LayoutBuilderStats) {
        self.reads_offered += other.reads_offered;
        self.reads_absorbed += other.reads_absorbed;
        self.rejected_insufficient_overlap += other.rejected_insufficient_overlap;
        self.rejected_mismatch += other.rejected_mismatch;
        self.layouts_seeded += other.layouts_seeded;
        self.layouts_merged += other.layouts_merged;
    }
}
