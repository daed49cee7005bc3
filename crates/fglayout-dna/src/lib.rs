#![deny(unsafe_code)]

//! Nucleotide alphabet utilities and constants.
//!
//! This crate provides the fundamental base handling shared by the layout code:
//! - The fixed A, C, G, T ordering used for tallies and tie-breaking
//! - A lookup table from ASCII bases to tally indices
//! - Constants for the Phred range and no-call handling

/// The four DNA bases in tally order. Ties between equal counts resolve to the earliest entry.
pub const DNA_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Number of tallied bases.
pub const DNA_BASE_COUNT: usize = 4;

/// No-call base character, used for positions without any observation.
pub const NO_CALL_BASE: u8 = b'N';

/// Maximum Phred score representable in SAM/BAM.
pub const MAX_PHRED: u8 = 93;

/// Sentinel stored in [`BASE_TO_INDEX`] for anything that is not A, C, G or T.
pub const INVALID_BASE_INDEX: u8 = 255;

/// Lookup table for converting an ASCII base to its tally index (0-3 for A,C,G,T).
///
/// Lowercase bases map to the same index as their uppercase form.
pub const BASE_TO_INDEX: [u8; 256] = {
    let mut table = [INVALID_BASE_INDEX; 256];
    table[b'A' as usize] = 0;
    table[b'a' as usize] = 0;
    table[b'C' as usize] = 1;
    table[b'c' as usize] = 1;
    table[b'G' as usize] = 2;
    table[b'g' as usize] = 2;
    table[b'T' as usize] = 3;
    table[b't' as usize] = 3;
    table
};

/// Returns the tally index of `base`, or `None` for N and other non-ACGT symbols.
///
/// # Examples
///
/// ```
/// use fglayout_dna::base_index;
///
/// assert_eq!(base_index(b'A'), Some(0));
/// assert_eq!(base_index(b't'), Some(3));
/// assert_eq!(base_index(b'N'), None);
/// ```
#[inline]
#[must_use]
pub const fn base_index(base: u8) -> Option<usize> {
    let idx = BASE_TO_INDEX[base as usize];
    if idx == INVALID_BASE_INDEX { None } else { Some(idx as usize) }
}
