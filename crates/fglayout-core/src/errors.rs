//! Custom error types for layout operations.

use thiserror::Error;

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Error type for layout operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Invalid parameter value provided
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// Invalid quality threshold
    #[error("Invalid quality threshold: {value} (must be between 0 and {max})")]
    InvalidQuality {
        /// The invalid quality value
        value: u8,
        /// Maximum valid value (usually 93 for SAM/BAM)
        max: u8,
    },

    /// A read whose quality array does not line up with its bases
    #[error(
        "Read '{read}' has {quality_len} base qualities for {sequence_len} bases"
    )]
    QualityLengthMismatch {
        /// The read name
        read: String,
        /// Number of bases in the read
        sequence_len: usize,
        /// Number of quality scores in the read
        quality_len: usize,
    },

    /// A zero-length read offered to a layout
    #[error("Read '{read}' has no bases and cannot be added to a layout")]
    EmptyRead {
        /// The read name
        read: String,
    },

    /// A layout coordinate that does not fit the signed 32-bit anchor
    #[error("Layout coordinate {value} is outside the supported aligned position range")]
    CoordinateOverflow {
        /// The offending coordinate
        value: i64,
    },
}
