//! Level store: static geometry and entity definitions
//!
//! `Level::generate` is a pure function of the seed: the same seed always
//! yields a structurally identical layout. The reference layout is a
//! contiguous ground strip plus hand-authored floating platforms, a coin run,
//! one patrolling enemy, and a goal flag near the right edge. A level is
//! replaced wholesale on reset, never partially mutated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::body::KinematicBody;
use super::rect::Aabb;

/// A static platform block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
}

/// A collectible coin. `alive` flips false at most once per level lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub radius: f32,
    pub alive: bool,
}

/// A patrolling enemy. Patrol direction is the sign of `body.vel.x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: KinematicBody,
    pub alive: bool,
}

/// The goal trigger rectangle, read-only after generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Aabb,
}

/// One generated level: static geometry, entities, bounds, and the seed that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    pub bounds: Vec2,
    pub seed: u64,
}

/// Hand-authored floating platforms (x, y), all 80x16
const FLOATING_PLATFORMS: [(f32, f32); 9] = [
    (220.0, 300.0),
    (320.0, 260.0),
    (420.0, 220.0),
    (600.0, 300.0),
    (700.0, 260.0),
    (820.0, 220.0),
    (980.0, 280.0),
    (1080.0, 240.0),
    (1180.0, 200.0),
];

/// Hand-authored coin x-positions, all at y=180
const COIN_COLUMNS: [f32; 9] = [
    260.0, 360.0, 460.0, 620.0, 720.0, 840.0, 1000.0, 1100.0, 1200.0,
];

/// Width of one ground block
const GROUND_BLOCK: f32 = 80.0;

impl Level {
    /// Generate the level for a seed.
    ///
    /// The reference layout is table-driven, so every seed currently maps to
    /// the same geometry; the seed is retained on the level so reset can
    /// regenerate the identical layout and hosts can correlate runs.
    pub fn generate(seed: u64) -> Self {
        let mut platforms = Vec::new();

        // Contiguous ground strip spanning the level
        let mut x = 0.0;
        while x < LEVEL_WIDTH {
            platforms.push(Platform {
                rect: Aabb::new(x, GROUND_Y, GROUND_BLOCK, LEVEL_HEIGHT - GROUND_Y),
            });
            x += GROUND_BLOCK;
        }

        for (px, py) in FLOATING_PLATFORMS {
            platforms.push(Platform {
                rect: Aabb::new(px, py, 80.0, 16.0),
            });
        }

        let coins = COIN_COLUMNS
            .iter()
            .map(|&cx| Coin {
                pos: Vec2::new(cx, 180.0),
                radius: COIN_RADIUS,
                alive: true,
            })
            .collect();

        // One goomba-like enemy patrolling the ground, initially leftward
        let mut enemy_body = KinematicBody::new(
            Vec2::new(520.0, GROUND_Y - ENEMY_HEIGHT),
            Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
        );
        enemy_body.vel.x = ENEMY_PATROL_SPEED;
        let enemies = vec![Enemy {
            body: enemy_body,
            alive: true,
        }];

        let goal = Goal {
            rect: Aabb::new(1400.0, 160.0, 12.0, 120.0),
        };

        Self {
            platforms,
            coins,
            enemies,
            goal,
            bounds: Vec2::new(LEVEL_WIDTH, LEVEL_HEIGHT),
            seed,
        }
    }
}

/// Whether any platform top sits directly beneath `center_x` at foot level:
/// the top must lie within a small band around the feet.
pub fn has_support(platforms: &[Platform], center_x: f32, feet_y: f32) -> bool {
    platforms.iter().any(|p| {
        p.rect.spans_x(center_x) && feet_y + 2.0 >= p.rect.top() && feet_y <= p.rect.top() + 6.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = Level::generate(1337);
        let b = Level::generate(1337);
        assert_eq!(a, b);
    }

    #[test]
    fn test_reference_layout() {
        let level = Level::generate(1337);

        // 20 ground blocks + 9 floating platforms
        assert_eq!(level.platforms.len(), 29);
        assert_eq!(level.coins.len(), 9);
        assert_eq!(level.enemies.len(), 1);

        let enemy = &level.enemies[0];
        assert_eq!(enemy.body.pos, Vec2::new(520.0, 340.0));
        assert_eq!(enemy.body.vel.x, -1.0);
        assert!(enemy.alive);

        assert_eq!(level.goal.rect, Aabb::new(1400.0, 160.0, 12.0, 120.0));
        assert_eq!(level.bounds, Vec2::new(1600.0, 480.0));
        assert!(level.coins.iter().all(|c| c.alive));
    }

    #[test]
    fn test_ground_strip_is_contiguous() {
        let level = Level::generate(7);
        let mut ground: Vec<_> = level
            .platforms
            .iter()
            .filter(|p| p.rect.top() == GROUND_Y)
            .collect();
        ground.sort_by(|a, b| a.rect.pos.x.total_cmp(&b.rect.pos.x));

        let mut expected_x = 0.0;
        for block in &ground {
            assert_eq!(block.rect.pos.x, expected_x);
            expected_x += block.rect.size.x;
        }
        assert_eq!(expected_x, LEVEL_WIDTH);
    }

    #[test]
    fn test_support_query() {
        let level = Level::generate(1);

        // On the ground strip
        assert!(has_support(&level.platforms, 400.0, GROUND_Y));
        // Past the left edge of the level
        assert!(!has_support(&level.platforms, -1.0, GROUND_Y));
        // At foot level of a floating platform
        assert!(has_support(&level.platforms, 250.0, 300.0));
        // Same x but feet well above the platform top
        assert!(!has_support(&level.platforms, 250.0, 250.0));
    }
}
