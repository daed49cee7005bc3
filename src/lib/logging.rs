//! Logging utilities for formatted output.
//!
//! Provides consistent, human-readable summaries of layouts and layout builder statistics.

use fglayout_core::{Layout, LayoutBuilderStats};
use fglayout_dna::NO_CALL_BASE;

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use fglayout_lib::logging::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a percentage with specified decimal places.
///
/// # Arguments
///
/// * `value` - The fraction (0.0-1.0) to format as percentage
/// * `decimals` - Number of decimal places to include
///
/// # Examples
///
/// ```
/// use fglayout_lib::logging::format_percent;
///
/// assert_eq!(format_percent(0.9543, 2), "95.43%");
/// assert_eq!(format_percent(0.5, 1), "50.0%");
/// assert_eq!(format_percent(1.0, 0), "100%");
/// ```
#[must_use]
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value * 100.0, decimals = decimals)
}

/// Logs a formatted summary of a layout.
///
/// Outputs the layout length, anchor, read count, the number of positions with no call and the
/// mean high-quality support per position.
///
/// # Examples
///
/// ```
/// use fglayout_lib::logging::log_layout_summary;
/// use fglayout_lib::{Layout, LayoutRead, ReadKey};
///
/// let read = LayoutRead::new(ReadKey::new("r1", true), b"ACGT".to_vec(), vec![37; 4], 0)?;
/// let layout = Layout::from_read(read, 30)?;
/// log_layout_summary(&layout);
/// # Ok::<(), fglayout_lib::LayoutError>(())
/// ```
pub fn log_layout_summary(layout: &Layout) {
    log::info!("Layout Summary:");
    log::info!("  Length: {}", format_count(layout.len() as u64));
    log::info!("  Aligned position: {}", layout.aligned_position());
    log::info!("  Reads: {}", format_count(layout.reads().len() as u64));

    if layout.is_empty() {
        return;
    }

    let consensus = layout.consensus_sequence();
    let no_calls = consensus.iter().filter(|&&base| base == NO_CALL_BASE).count();
    log::info!("  No-call positions: {}", format_count(no_calls as u64));

    let total_support: u64 = layout.high_qual_support_counts().into_iter().map(u64::from).sum();
    #[expect(clippy::cast_precision_loss, reason = "support totals never exceed 2^53")]
    let mean_support = total_support as f64 / layout.len() as f64;
    log::info!("  Mean high-quality support: {mean_support:.1}");
    log::debug!("  Consensus: {}", String::from_utf8_lossy(&consensus));
    log::debug!("  Support:   {}", layout.high_qual_support_string());
}

/// Logs a formatted summary of layout builder statistics.
///
/// # Examples
///
/// ```
/// use fglayout_lib::LayoutBuilderStats;
/// use fglayout_lib::logging::log_builder_summary;
///
/// let stats = LayoutBuilderStats { reads_offered: 100, reads_absorbed: 80, ..Default::default() };
/// log_builder_summary(&stats);
/// ```
pub fn log_builder_summary(stats: &LayoutBuilderStats) {
    log::info!("Layout Building Summary:");
    log::info!("  Reads offered: {}", format_count(stats.reads_offered));
    log::info!("  Reads absorbed: {}", format_count(stats.reads_absorbed));

    if stats.reads_offered > 0 {
        log::info!("  Absorb rate: {}", format_percent(stats.absorb_rate(), 2));
    }

    log::info!("  Layouts seeded: {}", format_count(stats.layouts_seeded));
    if stats.layouts_merged > 0 {
        log::info!("  Layouts merged: {}", format_count(stats.layouts_merged));
    }

    if stats.total_rejected() > 0 {
        log::info!("  Rejected reads: {}", format_count(stats.total_rejected()));
        log::info!(
            "    Insufficient overlap: {}",
            format_count(stats.rejected_insufficient_overlap)
        );
        log::info!("    High-quality mismatch: {}", format_count(stats.rejected_mismatch));
    }
}
