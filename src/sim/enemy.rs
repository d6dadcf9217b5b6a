//! Enemy patrol controller
//!
//! Enemies walk a fixed horizontal patrol. After advancing, the controller
//! probes the level at the projected next position and reverses the patrol
//! sign on either of two conditions: the projected box overlaps a platform's
//! vertical side (a wall), or no platform top lies beneath the projected
//! horizontal center (a ledge). The reversal takes effect on the following
//! step, never retroactively. Dead enemies are skipped entirely.

use glam::Vec2;

use super::body::KinematicBody;
use super::level::{self, Enemy, Platform};

/// Advance one enemy by one tick and reorient it against the level geometry.
pub fn step(enemy: &mut Enemy, platforms: &[Platform]) {
    if !enemy.alive {
        return;
    }

    enemy.body.pos.x += enemy.body.vel.x;

    if hits_wall(&enemy.body, platforms) || at_ledge(&enemy.body, platforms) {
        enemy.body.vel.x = -enemy.body.vel.x;
    }
}

/// Projected box overlaps a platform's side. Standing on a platform top does
/// not count: feet within a small band of the top are a rest, not a wall.
fn hits_wall(body: &KinematicBody, platforms: &[Platform]) -> bool {
    let next = Vec2::new(body.pos.x + body.vel.x, body.pos.y);
    let proj = body.aabb_at(next);

    platforms
        .iter()
        .any(|p| proj.overlaps(&p.rect) && body.bottom() > p.rect.top() + 2.0)
}

/// No platform top beneath the projected horizontal center
fn at_ledge(body: &KinematicBody, platforms: &[Platform]) -> bool {
    let next_center = body.pos.x + body.vel.x + body.size.x / 2.0;
    !level::has_support(platforms, next_center, body.bottom())
}
