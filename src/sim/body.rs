//! Kinematic body shared by the player and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Aabb;

/// A moving entity: position, velocity, extents, grounded flag.
///
/// Owned exclusively by whichever entity it belongs to; never shared. Position
/// is the top-left corner of the body's box in level space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set only by a downward collision resolution within the current tick
    pub grounded: bool,
}

impl KinematicBody {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            grounded: false,
        }
    }

    /// The body's box at its current position
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// The body's box at an arbitrary position (for projected probes)
    #[inline]
    pub fn aabb_at(&self, pos: Vec2) -> Aabb {
        Aabb::from_pos_size(pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_tracks_position() {
        let mut body = KinematicBody::new(Vec2::new(80.0, 320.0), Vec2::new(24.0, 32.0));
        assert_eq!(body.aabb(), Aabb::new(80.0, 320.0, 24.0, 32.0));
        assert_eq!(body.bottom(), 352.0);
        assert_eq!(body.center_x(), 92.0);

        body.pos.x += 10.0;
        assert_eq!(body.aabb().pos.x, 90.0);
    }
}
