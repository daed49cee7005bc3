//! Reads as consumed by the layout code.
//!
//! Extracting bases, qualities and aligned positions from alignment records happens upstream;
//! this module only defines the validated, immutable shape the layout code works with.

use std::fmt;

use crate::errors::{LayoutError, Result};

/// Identity of a read, used for bookkeeping only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReadKey {
    /// Read name as found in the alignment record
    pub read_name: String,
    /// True for the first read of a pair (or an unpaired read)
    pub first_of_pair: bool,
}

impl ReadKey {
    /// Creates a new read key.
    #[must_use]
    pub fn new(read_name: impl Into<String>, first_of_pair: bool) -> Self {
        Self { read_name: read_name.into(), first_of_pair }
    }
}

impl fmt::Display for ReadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.read_name, if self.first_of_pair { 1 } else { 2 })
    }
}

/// A read positioned in a shared coordinate system.
///
/// Local index `i` of the read sits at global coordinate `i - aligned_position`. The aligned
/// position may be negative or point past the end of the read.
///
/// Bases and qualities are guaranteed to have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRead {
    key: ReadKey,
    sequence: Vec<u8>,
    base_qualities: Vec<u8>,
    aligned_position: i32,
}

impl LayoutRead {
    /// Creates a new read.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::QualityLengthMismatch`] if `base_qualities` is not the same length
    /// as `sequence`.
    pub fn new(
        key: ReadKey,
        sequence: Vec<u8>,
        base_qualities: Vec<u8>,
        aligned_position: i32,
    ) -> Result<Self> {
        if sequence.len() != base_qualities.len() {
            return Err(LayoutError::QualityLengthMismatch {
                read: key.to_string(),
                sequence_len: sequence.len(),
                quality_len: base_qualities.len(),
            });
        }
        Ok(Self { key, sequence, base_qualities, aligned_position })
    }

    /// Returns the read identity.
    #[must_use]
    pub fn key(&self) -> &ReadKey {
        &self.key
    }

    /// Returns the read bases.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Returns the Phred base qualities, parallel to [`Self::sequence`].
    #[must_use]
    pub fn base_qualities(&self) -> &[u8] {
        &self.base_qualities
    }

    /// Returns the local index of the read that sits at global coordinate 0.
    #[must_use]
    pub fn aligned_position(&self) -> i32 {
        self.aligned_position
    }

    /// Returns the number of bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the read has no bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Returns a copy of this read placed at a different aligned position.
    #[must_use]
    pub fn with_aligned_position(&self, aligned_position: i32) -> Self {
        Self { aligned_position, ..self.clone() }
    }
}
