//! # Read Layouts
//!
//! A [`Layout`] is the consensus built from reads that are believed to come from the same
//! region. It is a run of per-position [`BaseSupport`] cells plus a signed anchor, the
//! `aligned_position`, naming the cell that sits at global coordinate 0.
//!
//! ## Coordinates
//!
//! Every read and every layout declares which of its local indices sits at global coordinate 0.
//! Local index `i` therefore maps to global coordinate `i - aligned_position`, and two entities
//! are lined up by subtracting their aligned positions. The anchor is free to lie outside the
//! cell range, e.g. a layout whose first base is two positions to the right of coordinate 0 has
//! an aligned position of -2.
//!
//! All arithmetic is done in `i64` and every global-to-local translation goes through
//! [`Layout::to_local`].
//!
//! ## Tallies
//!
//! Each position keeps two tallies:
//! - **high-quality support**: observations whose base quality met the minimum; this drives the
//!   consensus and the reported support counts
//! - **all support**: every observation regardless of quality; only consulted when a position has
//!   no high-quality support at all, to render a weak consensus base
//!
//! ## Ownership
//!
//! Mutation ([`Layout::add_read`]) needs `&mut Layout`, matching needs `&Layout`. A coordinating
//! stage that processes layouts on several threads hands each layout to one worker at a time, or
//! wraps the whole layout in a lock; extension can re-index every cell, so finer-grained locking
//! is not meaningful.

use fglayout_dna::NO_CALL_BASE;

use crate::base_support::BaseSupport;
use crate::errors::{LayoutError, Result};
use crate::read::LayoutRead;

/// Largest support count rendered by [`Layout::high_qual_support_string`].
const MAX_SUPPORT_DIGIT: u32 = 9;

/// Consensus of overlapping reads with per-position base tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Quality-gated tallies, one per consensus position
    high_qual_support: Vec<BaseSupport>,
    /// Ungated tallies, parallel to `high_qual_support`
    all_support: Vec<BaseSupport>,
    /// Local index of the cell at global coordinate 0
    aligned_position: i32,
    /// Reads absorbed into this layout, anchored in this layout's coordinate system
    reads: Vec<LayoutRead>,
}

impl Layout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layout seeded with a single read.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyRead`] if the read has no bases.
    pub fn from_read(read: LayoutRead, min_base_quality: u8) -> Result<Self> {
        let mut layout = Self::new();
        layout.add_read(read, min_base_quality)?;
        Ok(layout)
    }

    /// Returns the number of consensus positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.high_qual_support.len()
    }

    /// Returns true if no read has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high_qual_support.is_empty()
    }

    /// Returns the local index of the position at global coordinate 0.
    #[must_use]
    pub fn aligned_position(&self) -> i32 {
        self.aligned_position
    }

    /// Returns the reads absorbed into this layout.
    #[must_use]
    pub fn reads(&self) -> &[LayoutRead] {
        &self.reads
    }

    /// Returns the quality-gated tallies, one per position.
    #[must_use]
    pub fn high_qual_support(&self) -> &[BaseSupport] {
        &self.high_qual_support
    }

    /// Returns the ungated tallies, one per position.
    #[must_use]
    pub fn all_support(&self) -> &[BaseSupport] {
        &self.all_support
    }

    /// Converts a global coordinate to a local index, which may fall outside the cell range.
    #[inline]
    #[must_use]
    pub fn to_local(&self, global: i64) -> i64 {
        global + i64::from(self.aligned_position)
    }

    /// Returns the cell index at a global coordinate, or `None` outside the layout.
    #[must_use]
    pub fn local_index(&self, global: i64) -> Option<usize> {
        usize::try_from(self.to_local(global)).ok().filter(|&i| i < self.len())
    }

    /// Returns the consensus base at a cell index.
    ///
    /// Falls back to the best base regardless of quality when the cell has no high-quality
    /// support, and to `N` when it has no observation at all.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn consensus_base(&self, index: usize) -> u8 {
        self.high_qual_support[index]
            .dominant_base()
            .or_else(|| self.all_support[index].dominant_base())
            .unwrap_or(NO_CALL_BASE)
    }

    /// Returns the consensus sequence.
    #[must_use]
    pub fn consensus_sequence(&self) -> Vec<u8> {
        (0..self.len()).map(|i| self.consensus_base(i)).collect()
    }

    /// Returns the consensus sequence as a string.
    #[must_use]
    pub fn consensus_sequence_string(&self) -> String {
        String::from_utf8_lossy(&self.consensus_sequence()).into_owned()
    }

    /// Returns the high-quality support total of every position.
    #[must_use]
    pub fn high_qual_support_counts(&self) -> Vec<u32> {
        self.high_qual_support.iter().map(BaseSupport::total).collect()
    }

    /// Renders the high-quality support of every position as one digit, capped at 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use fglayout_core::{Layout, LayoutRead, ReadKey};
    ///
    /// let quals = vec![37, 37, 10, 37];
    /// let read = LayoutRead::new(ReadKey::new("r1", true), b"ACGT".to_vec(), quals, 0)?;
    /// let layout = Layout::from_read(read, 30)?;
    /// assert_eq!(layout.high_qual_support_string(), "1101");
    /// # Ok::<(), fglayout_core::LayoutError>(())
    /// ```
    #[must_use]
    pub fn high_qual_support_string(&self) -> String {
        self.high_qual_support
            .iter()
            .map(|support| {
                char::from_digit(support.total().min(MAX_SUPPORT_DIGIT), 10).unwrap_or('9')
            })
            .collect()
    }

    /// Folds a read into the layout.
    ///
    /// The cell range grows on either side as needed; existing cells keep their global
    /// coordinates, so prepending `n` cells moves the aligned position by `n`. Every base is
    /// tallied as high-quality support when its quality is at least `min_base_quality`.
    ///
    /// No consistency check is made here; callers normally test the read with
    /// [`crate::builder::layout_match`] first. The first read added to an empty layout defines
    /// its anchor.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyRead`] for a read without bases and
    /// [`LayoutError::CoordinateOverflow`] if the anchor would leave the `i32` range. The layout
    /// is unchanged on error.
    pub fn add_read(&mut self, read: LayoutRead, min_base_quality: u8) -> Result<()> {
        if read.is_empty() {
            return Err(LayoutError::EmptyRead { read: read.key().to_string() });
        }

        if self.is_empty() {
            self.aligned_position = read.aligned_position();
            self.high_qual_support = vec![BaseSupport::new(); read.len()];
            self.all_support = vec![BaseSupport::new(); read.len()];
        } else {
            self.extend_to_cover(&read)?;
        }

        let start = to_usize(self.read_start(&read))?;
        let cells =
            self.high_qual_support[start..].iter_mut().zip(self.all_support[start..].iter_mut());
        for ((&base, &qual), (high_qual, all)) in
            read.sequence().iter().zip(read.base_qualities()).zip(cells)
        {
            high_qual.observe(base, qual >= min_base_quality);
            all.observe(base, true);
        }

        self.reads.push(read);
        Ok(())
    }

    /// Returns the local index of the read's first base in this layout.
    fn read_start(&self, read: &LayoutRead) -> i64 {
        // global coordinate of the read's index 0 is -aligned_position
        self.to_local(-i64::from(read.aligned_position()))
    }

    /// Grows the cell range so that every base of `read` has a cell.
    fn extend_to_cover(&mut self, read: &LayoutRead) -> Result<()> {
        let read_start = self.read_start(read);
        let read_end = read_start + len_i64(read.len())?;

        let prepend = (-read_start).max(0);
        let new_aligned_position = i64::from(self.aligned_position) + prepend;
        let new_aligned_position = i32::try_from(new_aligned_position)
            .map_err(|_| LayoutError::CoordinateOverflow { value: new_aligned_position })?;
        let append = (read_end - len_i64(self.len())?).max(0);

        if prepend > 0 {
            let n = to_usize(prepend)?;
            log::debug!(
                "Extending layout start by {n} bases for read {}, aligned position {} -> {}",
                read.key(),
                self.aligned_position,
                new_aligned_position
            );
            self.high_qual_support.splice(0..0, std::iter::repeat_n(BaseSupport::new(), n));
            self.all_support.splice(0..0, std::iter::repeat_n(BaseSupport::new(), n));
            self.aligned_position = new_aligned_position;
        }
        if append > 0 {
            let new_len = self.len() + to_usize(append)?;
            log::debug!("Extending layout end by {append} bases for read {}", read.key());
            self.high_qual_support.resize(new_len, BaseSupport::new());
            self.all_support.resize(new_len, BaseSupport::new());
        }
        Ok(())
    }

    /// Combines two layouts into a new one.
    ///
    /// `relative_offset` is the position of `layout1`'s first cell in `layout2`'s local index
    /// space: cell `k` of `layout2` lines up with cell `k - relative_offset` of `layout1`.
    /// Swapping the two layouts and negating the offset yields the same merged tallies. The new
    /// layout spans both inputs, every cell carries the summed tallies of the inputs covering it,
    /// and its aligned position is `merged_aligned_position`. Cells covered by neither input (a
    /// gap between non-overlapping layouts) render as `N`.
    ///
    /// The retained reads of both inputs are carried over, re-anchored into the merged
    /// coordinate system.
    ///
    /// No minimum base quality is taken. Both inputs already hold quality-gated tallies, and
    /// those are summed as they are, so the merged support equals what adding every retained read
    /// with the inputs' threshold would give.
    ///
    /// Agreement between the inputs is not checked. An incorrect offset is not an error here and
    /// produces a poor or contradictory consensus, so callers must establish the offset first.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::CoordinateOverflow`] if a re-anchored read position does not fit
    /// the `i32` range.
    pub fn merge(
        layout1: &Layout,
        layout2: &Layout,
        relative_offset: i32,
        merged_aligned_position: i32,
    ) -> Result<Layout> {
        let offset = i64::from(relative_offset);
        let (start1, start2) = if layout1.is_empty() || layout2.is_empty() {
            (0, 0)
        } else {
            (offset.max(0), (-offset).max(0))
        };
        let len = (start1 + len_i64(layout1.len())?).max(start2 + len_i64(layout2.len())?);

        let mut merged = Layout {
            high_qual_support: vec![BaseSupport::new(); to_usize(len)?],
            all_support: vec![BaseSupport::new(); to_usize(len)?],
            aligned_position: merged_aligned_position,
            reads: Vec::with_capacity(layout1.reads.len() + layout2.reads.len()),
        };

        for (layout, start) in [(layout1, start1), (layout2, start2)] {
            merged.absorb_layout(layout, start)?;
        }

        log::debug!(
            "Merged layouts of {} and {} bases at offset {relative_offset} into {} bases, {} reads",
            layout1.len(),
            layout2.len(),
            merged.len(),
            merged.reads.len()
        );
        Ok(merged)
    }

    /// Adds the tallies and reads of `other`, whose first cell lands at local index `start`.
    fn absorb_layout(&mut self, other: &Layout, start: i64) -> Result<()> {
        let first = to_usize(start)?;
        let cells =
            self.high_qual_support[first..].iter_mut().zip(self.all_support[first..].iter_mut());
        for ((high_qual, all), (other_high_qual, other_all)) in
            cells.zip(other.high_qual_support.iter().zip(other.all_support.iter()))
        {
            high_qual.add(other_high_qual);
            all.add(other_all);
        }

        // a read at local index i of `other` sits at local index start + i here
        let shift = i64::from(self.aligned_position) - i64::from(other.aligned_position) - start;
        for read in &other.reads {
            let aligned_position = i64::from(read.aligned_position()) + shift;
            let aligned_position = i32::try_from(aligned_position)
                .map_err(|_| LayoutError::CoordinateOverflow { value: aligned_position })?;
            self.reads.push(read.with_aligned_position(aligned_position));
        }
        Ok(())
    }
}

fn len_i64(len: usize) -> Result<i64> {
    i64::try_from(len).map_err(|_| LayoutError::CoordinateOverflow { value: i64::MAX })
}

fn to_usize(value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| LayoutError::CoordinateOverflow { value })
}
