#![deny(unsafe_code)]

//! # fglayout - Read Layout Consensus Library
//!
//! This library builds consensus layouts from short, overlapping, quality-scored reads that come
//! from the same region. A layout is a merged sequence plus, for every position, a tally of the
//! high-quality bases observed there.
//!
//! ## Overview
//!
//! ### Core Functionality
//!
//! - **[`Layout`]** - the layout itself: read absorption, consensus derivation and merging
//! - **[`layout_match`]** / **[`sequence_match_count`]** - the match test deciding whether a read
//!   belongs to a layout
//! - **[`LayoutBuilder`]** - validated options plus statistics around the free functions
//!
//! ### Utilities
//!
//! - **[`dna`]** - nucleotide alphabet constants and lookup tables
//! - **[`logging`]** - formatted summaries of layouts and builder statistics
//!
//! ## Quick Start
//!
//! ```
//! use fglayout_lib::{LayoutBuilder, LayoutOptions, LayoutRead, ReadKey};
//!
//! # fn main() -> fglayout_lib::Result<()> {
//! let options = LayoutOptions { min_base_quality: 30, min_overlap_bases: 5 };
//! let mut builder = LayoutBuilder::new(options)?;
//!
//! let read = |name: &str, seq: &str, aligned_position: i32| {
//!     let quals = vec![37; seq.len()];
//!     LayoutRead::new(ReadKey::new(name, true), seq.as_bytes().to_vec(), quals, aligned_position)
//! };
//!
//! let mut layout = builder.seed(read("read1", "CAGGTG", 4)?)?;
//! assert!(builder.try_add_read(&mut layout, &read("read2", "AGCCAGGT", 7)?)?);
//! assert!(builder.try_add_read(&mut layout, &read("read3", "AGGTGCAA", 3)?)?);
//!
//! assert_eq!(layout.consensus_sequence_string(), "AGCCAGGTGCAA");
//! assert_eq!(layout.aligned_position(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinates
//!
//! Every read and layout carries an aligned position: the local index that sits at global
//! coordinate 0. Local index `i` therefore sits at global coordinate `i - aligned_position`, and
//! reads and layouts sharing a coordinate system can be compared without copying.

pub mod logging;

pub use fglayout_core::{
    BaseSupport, Layout, LayoutBuilder, LayoutBuilderStats, LayoutError, LayoutOptions,
    LayoutRead, MatchOutcome, ReadKey, Result, base_support, builder, errors, layout,
    layout_match, match_outcome, options, read, sequence_match_count, stats, validation,
};
pub use fglayout_dna as dna;
