//! Level domain: tests for the tile loader.

use bevy::prelude::Vec2;

use super::{BlockKind, LevelBlocks, blocks_from_tiles};
use crate::content::LevelDef;

#[test]
fn test_two_by_three_grid_places_two_blocks() {
    let tiles = [0, 202, 0, 202, 0, 0];
    let blocks = blocks_from_tiles(&tiles, 3, 16.0, 16.0, BlockKind::Solid, 202);

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].bounds.position, Vec2::new(16.0, 0.0));
    assert_eq!(blocks[1].bounds.position, Vec2::new(0.0, 16.0));
    assert!(blocks.iter().all(|b| b.kind == BlockKind::Solid));
    assert!(blocks.iter().all(|b| b.bounds.width == 16.0 && b.bounds.height == 16.0));
}

#[test]
fn test_partial_trailing_row_is_processed() {
    let tiles = [0, 0, 0, 0, 0, 0, 202];
    let blocks = blocks_from_tiles(&tiles, 3, 16.0, 16.0, BlockKind::Solid, 202);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].bounds.position, Vec2::new(0.0, 32.0));
}

#[test]
fn test_zero_stride_and_empty_input_yield_nothing() {
    assert!(blocks_from_tiles(&[202, 202], 0, 16.0, 16.0, BlockKind::Solid, 202).is_empty());
    assert!(blocks_from_tiles(&[], 36, 16.0, 16.0, BlockKind::Solid, 202).is_empty());
}

#[test]
fn test_other_tile_values_are_empty() {
    let tiles = [1, 201, 203, 202];
    let blocks = blocks_from_tiles(&tiles, 2, 16.0, 16.0, BlockKind::Solid, 202);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].bounds.position, Vec2::new(16.0, 16.0));
}

#[test]
fn test_platform_pass_uses_its_own_height() {
    let def = LevelDef {
        stride: 2,
        tile_size: 16.0,
        marker: 202,
        platform_height: 4.0,
        floor_tiles: vec![0, 0, 202, 202],
        platform_tiles: vec![202, 0, 0, 0],
    };
    let blocks = LevelBlocks::from_def(&def);

    assert_eq!(blocks.solids.len(), 2);
    assert_eq!(blocks.platforms.len(), 1);
    assert_eq!(blocks.platforms[0].kind, BlockKind::Platform);
    assert_eq!(blocks.platforms[0].bounds.height, 4.0);
    assert_eq!(blocks.solids[0].bounds.height, 16.0);
    assert_eq!(blocks.size, Vec2::new(32.0, 32.0));
    assert_eq!(blocks.iter().count(), 3);
}

#[test]
fn test_fallback_level_has_floor_and_platforms() {
    let blocks = LevelBlocks::from_def(&LevelDef::fallback());

    assert!(!blocks.solids.is_empty());
    assert!(!blocks.platforms.is_empty());
    assert_eq!(blocks.size, Vec2::new(576.0, 432.0));
}

#[test]
fn test_fallback_platform_rows_are_one_jump_apart() {
    let reach = crate::movement::MovementTuning::default().single_jump_height();
    let level = LevelBlocks::from_def(&LevelDef::fallback());

    let mut rows: Vec<f32> = level.platforms.iter().map(|b| b.bounds.top()).collect();
    rows.sort_by(f32::total_cmp);
    rows.dedup();
    assert!(rows.len() > 1);

    for pair in rows.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(gap < reach, "gap {gap} exceeds jump reach {reach}");
    }
}
