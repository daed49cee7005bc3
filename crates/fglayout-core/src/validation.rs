//! Input validation utilities
//!
//! Common validation functions for layout parameters with consistent error messages.

use fglayout_dna::MAX_PHRED;

use crate::errors::{LayoutError, Result};

/// Validate that a quality score is within the valid Phred range
///
/// # Arguments
/// * `score` - Quality score to validate
/// * `name` - Name of the parameter for error messages
///
/// # Errors
/// Returns an error if the score exceeds the maximum Phred score
///
/// # Example
/// ```
/// use fglayout_core::validation::validate_quality_score;
///
/// validate_quality_score(30, "min-base-quality").unwrap();
/// assert!(validate_quality_score(94, "min-base-quality").is_err());
/// ```
pub fn validate_quality_score(score: u8, name: &str) -> Result<()> {
    if score > MAX_PHRED {
        log::warn!("Rejecting {name}: Q{score} is above Q{MAX_PHRED}");
        return Err(LayoutError::InvalidQuality { value: score, max: MAX_PHRED });
    }
    Ok(())
}

/// Validate that a count parameter is at least one
///
/// # Errors
/// Returns an error if `value` is zero
///
/// # Example
/// ```
/// use fglayout_core::validation::validate_positive;
///
/// validate_positive(20, "min-overlap-bases").unwrap();
/// assert!(validate_positive(0, "min-overlap-bases").is_err());
/// ```
pub fn validate_positive(value: usize, name: &str) -> Result<()> {
    if value == 0 {
        return Err(LayoutError::InvalidParameter {
            parameter: name.to_string(),
            reason: format!("{name} must be >= 1, got {value}"),
        });
    }
    Ok(())
}
