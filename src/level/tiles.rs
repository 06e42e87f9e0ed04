//! Level domain: flat tile grids to positioned collision blocks.

use crate::content::LevelDef;
use crate::geometry::Bounds;

use super::{BlockKind, CollisionBlock, LevelBlocks};

/// One block per tile equal to `marker`, at `(column * tile_size, row *
/// tile_size)` with `row = index / stride` and `column = index % stride`.
/// A trailing partial row is still read; a zero stride yields nothing.
pub fn blocks_from_tiles(
    tiles: &[u32],
    stride: usize,
    tile_size: f32,
    block_height: f32,
    kind: BlockKind,
    marker: u32,
) -> Vec<CollisionBlock> {
    if stride == 0 {
        return Vec::new();
    }

    tiles
        .chunks(stride)
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, tile)| **tile == marker)
                .map(move |(column, _)| CollisionBlock {
                    bounds: Bounds::new(
                        column as f32 * tile_size,
                        row as f32 * tile_size,
                        tile_size,
                        block_height,
                    ),
                    kind,
                })
        })
        .collect()
}

impl LevelBlocks {
    /// Runs both tile passes: full-height solids, then thin platforms.
    pub fn from_def(def: &LevelDef) -> Self {
        let solids = blocks_from_tiles(
            &def.floor_tiles,
            def.stride,
            def.tile_size,
            def.tile_size,
            BlockKind::Solid,
            def.marker,
        );
        let platforms = blocks_from_tiles(
            &def.platform_tiles,
            def.stride,
            def.tile_size,
            def.platform_height,
            BlockKind::Platform,
            def.marker,
        );

        Self::new(solids, platforms, def.pixel_size())
    }
}
