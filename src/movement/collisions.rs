//! Movement domain: axis-separated collision resolution.
//!
//! Each pass stops at the first block that collides, in list order. With
//! several adjacent blocks the result depends on that order; contacts are not
//! sorted by distance.

use crate::geometry::{overlaps, platform_overlaps};
use crate::level::CollisionBlock;
use crate::movement::COLLISION_EPSILON;
use crate::movement::physics::PhysicsBody;

/// Push the body out of the first solid block its hitbox overlaps after a
/// horizontal move. Platforms never block sideways motion.
pub(crate) fn resolve_horizontal(body: &mut PhysicsBody, solids: &[CollisionBlock]) {
    for block in solids {
        if !overlaps(&body.hitbox, &block.bounds) {
            continue;
        }

        if body.velocity.x > 0.0 {
            body.velocity.x = 0.0;
            let offset = body.hitbox.position.x - body.position.x + body.hitbox.width;
            body.position.x = block.bounds.left() - offset - COLLISION_EPSILON;
            break;
        }

        if body.velocity.x < 0.0 {
            body.velocity.x = 0.0;
            let offset = body.hitbox.position.x - body.position.x;
            body.position.x = block.bounds.right() - offset + COLLISION_EPSILON;
            break;
        }
    }
}

/// Resolve a vertical move: solids first (landing or head bump), then
/// one-way platforms (landing only). Recomputes `grounded` from scratch.
pub(crate) fn resolve_vertical(
    body: &mut PhysicsBody,
    solids: &[CollisionBlock],
    platforms: &[CollisionBlock],
) {
    body.grounded = false;

    for block in solids {
        if !overlaps(&body.hitbox, &block.bounds) {
            continue;
        }

        if body.velocity.y > 0.0 {
            land_on(body, block);
            break;
        }

        if body.velocity.y < 0.0 {
            body.velocity.y = 0.0;
            let offset = body.hitbox.position.y - body.position.y;
            body.position.y = block.bounds.bottom() - offset + COLLISION_EPSILON;
            break;
        }
    }

    for block in platforms {
        if platform_overlaps(&body.hitbox, &block.bounds) && body.velocity.y > 0.0 {
            land_on(body, block);
            break;
        }
    }
}

fn land_on(body: &mut PhysicsBody, block: &CollisionBlock) {
    body.velocity.y = 0.0;
    let offset = body.hitbox.position.y - body.position.y + body.hitbox.height;
    body.position.y = block.bounds.top() - offset - COLLISION_EPSILON;
    body.grounded = true;
    body.can_jump = true;
}
