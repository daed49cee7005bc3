//! Layout merging tests.
//!
//! These tests build two layouts independently from reads of the same region, merge them and
//! check the merged layout against one built from all reads directly.

use fglayout_lib::{Layout, LayoutBuilder, LayoutOptions};

use crate::helpers::{
    assert_layout, assert_reads_agree_with_consensus, create_high_qual_read, create_read,
    pseudo_random_sequence, tile_reads,
};

const MIN_BASE_QUALITY: u8 = 30;

fn layout_of(reads: &[fglayout_lib::LayoutRead]) -> Layout {
    let mut layout = Layout::new();
    for read in reads {
        layout.add_read(read.clone(), MIN_BASE_QUALITY).unwrap();
    }
    layout
}

#[test]
fn test_merge_two_single_read_layouts() {
    let layout1 = Layout::from_read(
        create_read("read1", "CAGGTG", &[37, 37, 25, 25, 37, 37], 4),
        MIN_BASE_QUALITY,
    )
    .unwrap();
    let layout2 = Layout::from_read(
        create_read("read2", "AGGTGAT", &[37, 25, 37, 37, 37, 37, 25], 0),
        MIN_BASE_QUALITY,
    )
    .unwrap();

    let merged = Layout::merge(&layout1, &layout2, -1, 2).unwrap();
    assert_layout(&merged, "CAGGTGAT", "12012210", 2);
    assert_eq!(merged.reads().len(), 2);
}

#[test]
fn test_merge_matches_direct_build() {
    let reference = pseudo_random_sequence(200, 11);
    let reads = tile_reads("tile", &reference, 50, 10);
    let (left, right) = reads.split_at(reads.len() / 2);

    let left_layout = layout_of(left);
    let right_layout = layout_of(right);
    let direct = layout_of(&reads);

    // right_layout's first cell is global coordinate -aligned_position; express it in
    // left_layout's local index space
    let right_start = -right_layout.aligned_position();
    let offset_in_left = left_layout.to_local(i64::from(right_start));
    let offset = -i32::try_from(offset_in_left).unwrap();

    let merged = Layout::merge(&left_layout, &right_layout, offset, direct.aligned_position())
        .unwrap();

    assert_eq!(merged.consensus_sequence_string(), reference);
    assert_eq!(merged.high_qual_support(), direct.high_qual_support());
    assert_eq!(merged.all_support(), direct.all_support());
    assert_eq!(merged.reads().len(), reads.len());
    assert_reads_agree_with_consensus(&merged);
}

#[test]
fn test_merged_reads_rebuild_the_merged_layout() {
    let layout1 = layout_of(&[
        create_high_qual_read("read1", "CAGGTG", 4),
        create_high_qual_read("read2", "AGCCAGGT", 7),
    ]);
    let layout2 = layout_of(&[create_high_qual_read("read3", "AGGTGCAA", 3)]);

    // layout2 cell 0 (global -3) is layout1 cell 4
    let merged = Layout::merge(&layout1, &layout2, -4, 7).unwrap();
    assert_layout(&merged, "AGCCAGGTGCAA", "111233332111", 7);

    let rebuilt = layout_of(merged.reads());
    assert_eq!(rebuilt.high_qual_support(), merged.high_qual_support());
    assert_eq!(rebuilt.aligned_position(), merged.aligned_position());
}

#[test]
fn test_builder_merge_updates_stats() {
    let mut builder = LayoutBuilder::new(LayoutOptions::default()).unwrap();
    let layout1 = builder.seed(create_high_qual_read("read1", "CAGGTG", 4)).unwrap();
    let layout2 = builder.seed(create_high_qual_read("read2", "AGGTGAT", 0)).unwrap();

    let merged = builder.merge(&layout1, &layout2, -1, 2).unwrap();
    let swapped = builder.merge(&layout2, &layout1, 1, 2).unwrap();

    assert_eq!(merged.consensus_sequence_string(), "CAGGTGAT");
    assert_eq!(merged.high_qual_support(), swapped.high_qual_support());
    assert_eq!(builder.stats().layouts_seeded, 2);
    assert_eq!(builder.stats().layouts_merged, 2);
}
