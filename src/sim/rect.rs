//! Axis-aligned bounding boxes
//!
//! The only collision primitive in the game. Level space has x growing right
//! and y growing down; a box is its top-left corner plus a size.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: touching edges do not count as overlap, so a body
    /// resting exactly on a platform top is not colliding with it.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Overlap extent on each axis. Only meaningful when `overlaps` is true;
    /// both components are then strictly positive.
    #[inline]
    pub fn overlap_depths(&self, other: &Aabb) -> Vec2 {
        let a_max = self.max();
        let b_max = other.max();
        Vec2::new(
            a_max.x.min(b_max.x) - self.pos.x.max(other.pos.x),
            a_max.y.min(b_max.y) - self.pos.y.max(other.pos.y),
        )
    }

    /// Whether `x` falls within the box's horizontal span (inclusive)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.pos.x && x <= self.pos.x + self.size.x
    }

    /// Circle-vs-rect test: clamp the circle center into the rect and compare
    /// squared distance against the squared radius.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let nearest = center.clamp(self.min(), self.max());
        center.distance_squared(nearest) <= radius * radius
    }
}
