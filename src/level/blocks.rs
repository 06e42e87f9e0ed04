//! Level domain: static collision blocks.

use bevy::prelude::*;

use crate::geometry::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Blocks movement from every side.
    Solid,
    /// One-way: only stops a falling occupant landing on top.
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBlock {
    pub bounds: Bounds,
    pub kind: BlockKind,
}

impl CollisionBlock {
    pub fn solid(bounds: Bounds) -> Self {
        Self {
            bounds,
            kind: BlockKind::Solid,
        }
    }

    pub fn platform(bounds: Bounds) -> Self {
        Self {
            bounds,
            kind: BlockKind::Platform,
        }
    }
}

/// Every collision block of the loaded level. Built once, read-only afterwards.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelBlocks {
    pub solids: Vec<CollisionBlock>,
    pub platforms: Vec<CollisionBlock>,
    /// Level extent in level pixels.
    pub size: Vec2,
}

impl LevelBlocks {
    pub fn new(solids: Vec<CollisionBlock>, platforms: Vec<CollisionBlock>, size: Vec2) -> Self {
        Self {
            solids,
            platforms,
            size,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionBlock> {
        self.solids.iter().chain(self.platforms.iter())
    }
}
