//! Error path integration tests.
//!
//! These tests verify that invalid inputs and options are reported as errors and leave existing
//! state untouched.

use fglayout_lib::{Layout, LayoutBuilder, LayoutError, LayoutOptions, LayoutRead, ReadKey};
use rstest::rstest;

use crate::helpers::create_high_qual_read;

#[rstest]
#[case(94, 20, LayoutError::InvalidQuality { value: 94, max: 93 })]
#[case(255, 20, LayoutError::InvalidQuality { value: 255, max: 93 })]
#[case(
    30,
    0,
    LayoutError::InvalidParameter {
        parameter: "min-overlap-bases".to_string(),
        reason: "min-overlap-bases must be >= 1, got 0".to_string(),
    }
)]
fn test_invalid_options_are_rejected(
    #[case] min_base_quality: u8,
    #[case] min_overlap_bases: usize,
    #[case] expected: LayoutError,
) {
    let result = LayoutBuilder::new(LayoutOptions { min_base_quality, min_overlap_bases });
    assert_eq!(result.unwrap_err(), expected);
}

#[test]
fn test_quality_length_mismatch() {
    let result = LayoutRead::new(ReadKey::new("read1", true), b"ACGT".to_vec(), vec![30; 3], 0);
    assert!(matches!(
        result,
        Err(LayoutError::QualityLengthMismatch { sequence_len: 4, quality_len: 3, .. })
    ));
}

#[test]
fn test_empty_read_leaves_layout_and_stats_untouched() {
    let mut builder = LayoutBuilder::new(LayoutOptions::default()).unwrap();
    let mut layout = builder.seed(create_high_qual_read("read1", "CAGGTG", 4)).unwrap();
    let before = layout.clone();

    let empty = LayoutRead::new(ReadKey::new("empty", false), Vec::new(), Vec::new(), 0).unwrap();
    let result = builder.try_add_read(&mut layout, &empty);

    assert_eq!(result, Err(LayoutError::EmptyRead { read: "empty/2".to_string() }));
    assert_eq!(layout, before);
    assert_eq!(builder.stats().reads_offered, 0);
    assert!(builder.seed(empty).is_err());
    assert_eq!(builder.stats().layouts_seeded, 1);
}

#[test]
fn test_match_against_empty_layout_is_false() {
    let read = create_high_qual_read("read1", "CAGGTG", 4);
    assert!(!fglayout_lib::layout_match(&Layout::new(), &read, 30, 1));
}
