//! End-to-end layout building scenarios.
//!
//! These tests drive reads through the match test and into layouts the way a coordinating
//! stage would, then check the resulting consensus, support and anchor.

use fglayout_lib::{Layout, LayoutBuilder, LayoutOptions, layout_match};
use rstest::rstest;

use crate::helpers::{
    LOW_QUAL, assert_layout, assert_reads_agree_with_consensus, create_high_qual_read,
    create_read, pseudo_random_sequence, tile_reads,
};

const MIN_BASE_QUALITY: u8 = 30;

#[test]
fn test_three_reads_build_one_layout() {
    let reads = [
        create_high_qual_read("read1", "CAGGTG", 4),
        create_high_qual_read("read2", "AGCCAGGT", 7),
        create_high_qual_read("read3", "AGGTGCAA", 3),
    ];

    let mut layout = Layout::new();
    for read in &reads {
        assert!(layout.is_empty() || layout_match(&layout, read, MIN_BASE_QUALITY, 5));
        layout.add_read(read.clone(), MIN_BASE_QUALITY).unwrap();
    }

    assert_layout(&layout, "AGCCAGGTGCAA", "111233332111", 7);
    assert_eq!(layout.reads().len(), 3);
    assert_reads_agree_with_consensus(&layout);
}

#[rstest]
#[case("CAGGTG", 6, true, "identical read, full overlap")]
#[case("CAGGTG", 7, false, "overlap longer than the read")]
#[case("CTGGTG", 6, false, "one high-quality mismatch")]
#[case("CTGGTG", 1, false, "mismatch rejects regardless of overlap")]
fn test_match_against_single_read_layout(
    #[case] seq: &str,
    #[case] min_overlap: usize,
    #[case] expected: bool,
    #[case] description: &str,
) {
    let layout =
        Layout::from_read(create_high_qual_read("read1", "CAGGTG", 4), MIN_BASE_QUALITY).unwrap();
    let read = create_high_qual_read("read2", seq, 4);
    let matched = layout_match(&layout, &read, MIN_BASE_QUALITY, min_overlap);
    assert_eq!(matched, expected, "{description}");
}

#[test]
fn test_low_quality_mismatch_is_tolerated() {
    let layout =
        Layout::from_read(create_high_qual_read("read1", "CAGGTG", 4), MIN_BASE_QUALITY).unwrap();
    let read = create_read("read2", "CTGGTG", &[37, LOW_QUAL, 37, 37, 37, 37], 4);

    assert!(layout_match(&layout, &read, MIN_BASE_QUALITY, 5));
    assert!(!layout_match(&layout, &read, MIN_BASE_QUALITY, 6));
}

#[test]
fn test_tiled_reads_reconstruct_reference() {
    let _ = env_logger::builder().is_test(true).try_init();

    let reference = pseudo_random_sequence(300, 42);
    let reads = tile_reads("tile", &reference, 100, 10);
    let options = LayoutOptions { min_base_quality: MIN_BASE_QUALITY, min_overlap_bases: 50 };
    let mut builder = LayoutBuilder::new(options).unwrap();

    let mut layout = Layout::new();
    for read in &reads {
        assert!(builder.try_add_read(&mut layout, read).unwrap(), "read {} rejected", read.key());
    }

    assert_eq!(layout.consensus_sequence_string(), reference);
    assert_eq!(layout.aligned_position(), 0);
    assert_eq!(layout.reads().len(), reads.len());
    assert_eq!(builder.stats().reads_absorbed, reads.len() as u64);
    assert_eq!(builder.stats().total_rejected(), 0);
    assert_reads_agree_with_consensus(&layout);
}

#[test]
fn test_reads_in_reverse_order_build_the_same_layout() {
    let reference = pseudo_random_sequence(120, 7);
    let reads = tile_reads("tile", &reference, 40, 8);

    let mut forward = Layout::new();
    for read in &reads {
        forward.add_read(read.clone(), MIN_BASE_QUALITY).unwrap();
    }
    let mut reverse = Layout::new();
    for read in reads.iter().rev() {
        reverse.add_read(read.clone(), MIN_BASE_QUALITY).unwrap();
    }

    assert_eq!(forward.consensus_sequence_string(), reverse.consensus_sequence_string());
    assert_eq!(forward.high_qual_support(), reverse.high_qual_support());
    assert_eq!(forward.aligned_position(), reverse.aligned_position());
}

#[test]
fn test_sequencing_error_is_outvoted() {
    let mut layout = Layout::new();
    for i in 0..4 {
        layout
            .add_read(create_high_qual_read(&format!("good{i}"), "ACGTACGT", 0), MIN_BASE_QUALITY)
            .unwrap();
    }
    layout.add_read(create_high_qual_read("bad", "ACGAACGT", 0), MIN_BASE_QUALITY).unwrap();

    assert_eq!(layout.consensus_sequence_string(), "ACGTACGT");
    let cell = layout.high_qual_support()[3];
    assert_eq!(cell.count(b'T'), 4);
    assert_eq!(cell.count(b'A'), 1);
}
