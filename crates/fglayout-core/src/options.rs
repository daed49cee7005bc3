//! Configuration for layout building.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::validation::{validate_positive, validate_quality_score};

/// Default minimum base quality for a base to count as high-quality support.
pub const DEFAULT_MIN_BASE_QUALITY: u8 = 30;

/// Default number of informative positions a read must share with a layout to join it.
pub const DEFAULT_MIN_OVERLAP_BASES: usize = 20;

/// Options controlling how reads are matched to and tallied into layouts.
///
/// Missing fields take their defaults when deserialized, so a config only needs to name what it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Minimum base quality for a base to be informative and to count as high-quality support
    pub min_base_quality: u8,
    /// Minimum number of informative positions a read must share with a layout to match it
    pub min_overlap_bases: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_base_quality: DEFAULT_MIN_BASE_QUALITY,
            min_overlap_bases: DEFAULT_MIN_OVERLAP_BASES,
        }
    }
}

impl LayoutOptions {
    /// Checks that every option is within its valid range.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_base_quality` is above Q93 or `min_overlap_bases` is zero.
    pub fn validate(&self) -> Result<()> {
        validate_quality_score(self.min_base_quality, "min-base-quality")?;
        validate_positive(self.min_overlap_bases, "min-overlap-bases")?;
        Ok(())
    }
}
