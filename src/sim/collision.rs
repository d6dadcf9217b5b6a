//! Collision resolution against static level geometry
//!
//! Movement is axis-separated: the clock applies the horizontal delta first,
//! then the vertical delta, one `move_and_resolve` call each. The x-then-y
//! order decides which axis wins in corner cases and must be preserved for
//! reproducibility. Each overlap is resolved along the axis with the smaller
//! absolute penetration, which pushes the body out of its shallowest overlap
//! and avoids snagging on block corners.

use glam::Vec2;

use crate::consts::*;

use super::body::KinematicBody;
use super::level::Platform;

/// Apply one tick of input acceleration, friction, and the speed clamp to
/// the horizontal velocity.
pub fn integrate_horizontal(body: &mut KinematicBody, left: bool, right: bool) {
    let mut accel = 0.0;
    if left {
        accel -= WALK_ACCEL;
    }
    if right {
        accel += WALK_ACCEL;
    }
    body.vel.x = ((body.vel.x + accel) * FRICTION).clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);
}

/// Apply one tick of gravity and the fall-speed clamp to the vertical
/// velocity.
pub fn integrate_vertical(body: &mut KinematicBody) {
    body.vel.y = (body.vel.y + GRAVITY).clamp(-MAX_FALL_SPEED, MAX_FALL_SPEED);
}

/// Move the body by a single-axis displacement, then push it out of every
/// overlapping platform.
///
/// Resolving along x pushes opposite the motion and zeroes the horizontal
/// velocity. Resolving along y snaps to the platform top when moving down
/// (zeroing vertical velocity and setting `grounded`) or to the platform
/// bottom when moving up (zeroing vertical velocity). The grounded flag is
/// never cleared here; the clock clears it once at the start of each tick.
pub fn move_and_resolve(body: &mut KinematicBody, delta: Vec2, platforms: &[Platform]) {
    body.pos += delta;

    for platform in platforms {
        let rect = body.aabb();
        if !rect.overlaps(&platform.rect) {
            continue;
        }

        let depths = rect.overlap_depths(&platform.rect);
        if depths.x < depths.y {
            if delta.x > 0.0 {
                body.pos.x -= depths.x;
            } else {
                body.pos.x += depths.x;
            }
            body.vel.x = 0.0;
        } else {
            // The push direction follows the motion on a real y delta. The
            // x pass can also end up here when the shallow overlap is
            // vertical (clipping a corner sideways); its y delta is zero, so
            // push toward the nearer face instead of deeper in.
            let downward = if delta.y != 0.0 {
                delta.y > 0.0
            } else {
                rect.pos.y + rect.size.y / 2.0 < platform.rect.pos.y + platform.rect.size.y / 2.0
            };
            if downward {
                // Landing: rest on the platform top
                body.pos.y -= depths.y;
                body.vel.y = 0.0;
                body.grounded = true;
            } else {
                // Head bonk: snap below the platform
                body.pos.y += depths.y;
                body.vel.y = 0.0;
            }
        }
    }
}
