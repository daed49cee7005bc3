//! # Layout Matching and Building
//!
//! This module decides whether a read belongs to a layout and drives read absorption.
//!
//! ## Comparison Model
//!
//! A read and a layout are lined up by a single integer shift derived from their aligned
//! positions; there are no gaps inside a read. Only *informative* positions take part in the
//! comparison: both sides must meet the minimum base quality. A consensus position counts as
//! high quality when at least one high-quality base supports it.
//!
//! ## Acceptance Rule
//!
//! A read matches a layout when
//! 1. at least `min_overlap_bases` informative positions are compared, and
//! 2. every informative position agrees.
//!
//! A single quality-confirmed disagreement rejects the read, no matter how long the agreeing
//! overlap is. Low-quality bases never veto and never confirm a match.
//!
//! ## Threading
//!
//! [`layout_match`] and [`match_outcome`] only read the layout and can run from several threads
//! at once. [`LayoutBuilder`] methods that absorb reads take `&mut Layout`.

use std::fmt;

use crate::errors::{LayoutError, Result};
use crate::layout::Layout;
use crate::options::LayoutOptions;
use crate::read::LayoutRead;
use crate::stats::LayoutBuilderStats;

/// Counts agreeing and informative positions between two sequences.
///
/// Walks `seq1` from `offset1` and `seq2` from `offset2` in lock-step for at most
/// `compare_length` positions, stopping early when either side runs out. A position is
/// informative only if both base qualities are at least `min_base_quality`; informative positions
/// with the same base (ignoring case) are matches.
///
/// Returns `(match_count, compare_count)`, where
/// `match_count <= compare_count <= compare_length`.
///
/// # Examples
///
/// ```
/// use fglayout_core::builder::sequence_match_count;
///
/// let quals = [37, 37, 10, 37];
/// let (matched, compared) = sequence_match_count(b"ACGT", b"ACTT", &quals, &quals, 0, 0, 4, 30);
/// assert_eq!((matched, compared), (3, 3));
/// ```
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn sequence_match_count(
    seq1: &[u8],
    seq2: &[u8],
    base_qual1: &[u8],
    base_qual2: &[u8],
    offset1: usize,
    offset2: usize,
    compare_length: usize,
    min_base_quality: u8,
) -> (usize, usize) {
    let side1 = tail(seq1, offset1).iter().zip(tail(base_qual1, offset1));
    let side2 = tail(seq2, offset2).iter().zip(tail(base_qual2, offset2));

    let mut match_count = 0;
    let mut compare_count = 0;
    for ((base1, &qual1), (base2, &qual2)) in side1.zip(side2).take(compare_length) {
        if qual1 < min_base_quality || qual2 < min_base_quality {
            continue;
        }
        compare_count += 1;
        if base1.eq_ignore_ascii_case(base2) {
            match_count += 1;
        }
    }
    (match_count, compare_count)
}

fn tail(values: &[u8], offset: usize) -> &[u8] {
    values.get(offset..).unwrap_or(&[])
}

/// Result of testing a read against a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchOutcome {
    /// Every informative position agreed and there were enough of them
    Accepted {
        /// Number of informative positions
        compared: usize,
    },
    /// Every informative position agreed but there were too few of them
    InsufficientOverlap {
        /// Number of informative positions
        compared: usize,
        /// Number of informative positions required
        required: usize,
    },
    /// At least one informative position disagreed
    Mismatch {
        /// Number of agreeing informative positions
        matched: usize,
        /// Number of informative positions
        compared: usize,
    },
}

impl MatchOutcome {
    /// Returns true if the read may be absorbed into the layout.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the number of informative positions compared.
    #[must_use]
    pub fn compared(&self) -> usize {
        match *self {
            Self::Accepted { compared }
            | Self::InsufficientOverlap { compared, .. }
            | Self::Mismatch { compared, .. } => compared,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted { compared } => write!(f, "accepted ({compared} informative bases)"),
            Self::InsufficientOverlap { compared, required } => {
                write!(f, "insufficient overlap ({compared} of {required} informative bases)")
            }
            Self::Mismatch { matched, compared } => {
                write!(f, "mismatch ({matched} of {compared} informative bases agree)")
            }
        }
    }
}

/// Compares a read against the consensus of a layout.
///
/// The read is lined up with the layout by `read.aligned_position() - layout.aligned_position()`
/// and compared in place over the overlapping window, counting positions the same way as
/// [`sequence_match_count`]. A layout cell without high-quality support is never informative,
/// whatever the minimum base quality. See the module documentation for the acceptance rule.
#[must_use]
pub fn match_outcome(
    layout: &Layout,
    read: &LayoutRead,
    min_base_quality: u8,
    min_overlap_bases: usize,
) -> MatchOutcome {
    // read index r lines up with layout index r - shift
    let shift = i64::from(read.aligned_position()) - i64::from(layout.aligned_position());
    let layout_start = clamp_start(-shift, layout.len());
    let read_start = clamp_start(shift, read.len());
    let overlap = (layout.len() - layout_start).min(read.len() - read_start);

    let cells = &layout.high_qual_support()[layout_start..layout_start + overlap];
    let bases = read.sequence()[read_start..].iter().zip(&read.base_qualities()[read_start..]);

    let mut matched = 0;
    let mut compared = 0;
    for (support, (base, &qual)) in cells.iter().zip(bases) {
        if qual < min_base_quality {
            continue;
        }
        let Some(consensus) = support.dominant_base() else {
            continue;
        };
        compared += 1;
        if consensus.eq_ignore_ascii_case(base) {
            matched += 1;
        }
    }

    if matched != compared {
        MatchOutcome::Mismatch { matched, compared }
    } else if compared < min_overlap_bases {
        MatchOutcome::InsufficientOverlap { compared, required: min_overlap_bases }
    } else {
        MatchOutcome::Accepted { compared }
    }
}

/// Clamps a possibly negative start index into `0..=len`.
fn clamp_start(start: i64, len: usize) -> usize {
    usize::try_from(start.max(0)).map_or(len, |start| start.min(len))
}

/// Returns true if `read` agrees with `layout` on at least `min_overlap_bases` informative
/// positions and disagrees on none.
///
/// A `false` result is a normal outcome, not an error.
#[must_use]
pub fn layout_match(
    layout: &Layout,
    read: &LayoutRead,
    min_base_quality: u8,
    min_overlap_bases: usize,
) -> bool {
    match_outcome(layout, read, min_base_quality, min_overlap_bases).is_accepted()
}

/// Builds layouts from reads using a fixed set of [`LayoutOptions`] and tracks what happened.
///
/// # Example
///
/// ```
/// use fglayout_core::{LayoutBuilder, LayoutOptions, LayoutRead, ReadKey};
///
/// let options = LayoutOptions { min_base_quality: 30, min_overlap_bases: 4 };
/// let mut builder = LayoutBuilder::new(options)?;
///
/// let seed = LayoutRead::new(ReadKey::new("r1", true), b"CAGGTG".to_vec(), vec![37; 6], 4)?;
/// let mut layout = builder.seed(seed)?;
///
/// let read = LayoutRead::new(ReadKey::new("r2", true), b"GGTGCA".to_vec(), vec![37; 6], 2)?;
/// assert!(builder.try_add_read(&mut layout, &read)?);
/// assert_eq!(layout.consensus_sequence_string(), "CAGGTGCA");
/// # Ok::<(), fglayout_core::LayoutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    options: LayoutOptions,
    stats: LayoutBuilderStats,
}

impl LayoutBuilder {
    /// Creates a builder after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    pub fn new(options: LayoutOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options, stats: LayoutBuilderStats::default() })
    }

    /// Returns the options in use.
    #[must_use]
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Returns the counts accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &LayoutBuilderStats {
        &self.stats
    }

    /// Tests `read` against `layout` without changing anything.
    #[must_use]
    pub fn match_outcome(&self, layout: &Layout, read: &LayoutRead) -> MatchOutcome {
        match_outcome(layout, read, self.options.min_base_quality, self.options.min_overlap_bases)
    }

    /// Returns true if `read` may be absorbed into `layout`.
    #[must_use]
    pub fn matches(&self, layout: &Layout, read: &LayoutRead) -> bool {
        self.match_outcome(layout, read).is_accepted()
    }

    /// Starts a new layout from a single read.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyRead`] if the read has no bases.
    pub fn seed(&mut self, read: LayoutRead) -> Result<Layout> {
        let layout = Layout::from_read(read, self.options.min_base_quality)?;
        self.stats.layouts_seeded += 1;
        Ok(layout)
    }

    /// Absorbs `read` into `layout` if it matches, returning whether it was absorbed.
    ///
    /// An empty layout accepts any read.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyRead`] if the read has no bases; the layout is not changed.
    pub fn try_add_read(&mut self, layout: &mut Layout, read: &LayoutRead) -> Result<bool> {
        if read.is_empty() {
            return Err(LayoutError::EmptyRead { read: read.key().to_string() });
        }
        self.stats.reads_offered += 1;

        if !layout.is_empty() {
            let outcome = self.match_outcome(layout, read);
            log::trace!("Read {} against layout of {} bases: {outcome}", read.key(), layout.len());
            if !outcome.is_accepted() {
                self.stats.record_rejection(&outcome);
                return Ok(false);
            }
        }

        layout.add_read(read.clone(), self.options.min_base_quality)?;
        self.stats.reads_absorbed += 1;
        Ok(true)
    }

    /// Merges two layouts, see [`Layout::merge`] for the offset convention.
    ///
    /// # Errors
    ///
    /// Returns an error if a re-anchored read position overflows.
    pub fn merge(
        &mut self,
        layout1: &Layout,
        layout2: &Layout,
        relative_offset: i32,
        merged_aligned_position: i32,
    ) -> Result<Layout> {
        let merged = Layout::merge(layout1, layout2, relative_offset, merged_aligned_position)?;
        self.stats.layouts_merged += 1;
        Ok(merged)
    }
}
