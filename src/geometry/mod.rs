//! Geometry domain: axis-aligned boxes and the two overlap predicates used by
//! every collision query in the game.
//!
//! Level space is screen-like: x grows to the right, y grows downward, and a
//! box is anchored at its top-left corner.


use bevy::prelude::*;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Box of `size` placed at `anchor + offset`.
    pub fn offset_from(anchor: Vec2, offset: Vec2, size: Vec2) -> Self {
        Self {
            position: anchor + offset,
            width: size.x,
            height: size.y,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size() * 0.5
    }
}

/// Closed-interval overlap on both axes. Touching edges count as overlapping.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.bottom() >= b.top() && a.top() <= b.bottom() && a.left() <= b.right() && a.right() >= b.left()
}

/// True when `a`'s bottom edge lies inside `b`'s vertical span and the
/// horizontal spans intersect. Lets an occupant land on top of a one-way
/// platform while passing through it from below or from the side.
pub fn platform_overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.bottom() >= b.top()
        && a.bottom() <= b.bottom()
        && a.left() <= b.right()
        && a.right() >= b.left()
}

/// Level space (y down) to Bevy world space (y up).
pub fn level_to_world(point: Vec2, z: f32) -> Vec3 {
    Vec3::new(point.x, -point.y, z)
}
