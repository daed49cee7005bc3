#![deny(unsafe_code)]

//! Read layout consensus building.
//!
//! A layout is the consensus of many short, overlapping, quality-scored reads that come from the
//! same region: a merged sequence plus, for every position, a tally of the high-quality bases
//! observed there.
//!
//! - [`base_support`] - per-position quality-gated base tallies
//! - [`read`] - validated reads positioned in a shared coordinate system
//! - [`layout`] - the layout itself: read absorption, consensus derivation and merging
//! - [`builder`] - read comparison, the match test, and [`LayoutBuilder`]
//! - [`options`] / [`validation`] - configuration and its checks
//! - [`stats`] - counts of absorbed and rejected reads

pub mod base_support;
pub mod builder;
pub mod errors;
pub mod layout;
pub mod options;
pub mod read;
pub mod stats;
pub mod validation;

pub use base_support::BaseSupport;
pub use builder::{LayoutBuilder, MatchOutcome, layout_match, match_outcome, sequence_match_count};
pub use errors::{LayoutError, Result};
pub use layout::Layout;
pub use options::LayoutOptions;
pub use read::{LayoutRead, ReadKey};
pub use stats::LayoutBuilderStats;
