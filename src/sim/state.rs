//! Simulation state aggregate and host-facing types
//!
//! All state that must survive between ticks lives in one explicit aggregate
//! owned by the clock. Components receive the parts they need by reference;
//! nothing reads ambient globals, which makes reset a single atomic swap of
//! the aggregate.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

use super::body::KinematicBody;
use super::camera::Camera;
use super::level::{Coin, Enemy, Level};
use super::rect::Aabb;

/// Configuration supplied to `Simulation::open`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Level generation seed
    pub seed: u64,
    /// Viewport the host renders through; drives the camera clamp range
    pub viewport: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        }
    }
}

/// Configuration rejected at `open`, before any tick runs.
///
/// The only fatal condition the simulation has: once running it cannot enter
/// an unrecoverable state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport dimensions must be positive, got {0}x{1}")]
    NonPositiveViewport(f32, f32),
    #[error("viewport width {viewport} exceeds level width {level}")]
    ViewportWiderThanLevel { viewport: f32, level: f32 },
}

impl SimConfig {
    /// Check the config before any tick runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport.x > 0.0 && self.viewport.y > 0.0) {
            return Err(ConfigError::NonPositiveViewport(
                self.viewport.x,
                self.viewport.y,
            ));
        }
        if self.viewport.x > LEVEL_WIDTH {
            return Err(ConfigError::ViewportWiderThanLevel {
                viewport: self.viewport.x,
                level: LEVEL_WIDTH,
            });
        }
        Ok(())
    }
}

/// Gameplay transitions observed during a tick, for host audio/UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    CoinCollected { index: usize },
    EnemyStomped { index: usize },
    PlayerDied,
    GoalReached,
}

/// Complete simulation state (deterministic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub tick: u64,
    /// The one live player body
    pub player: KinematicBody,
    /// Current level; replaced wholesale on reset
    pub level: Level,
    /// Monotonically increasing within a level lifetime, zeroed on reset
    pub score: u64,
    /// Sticky until reset
    pub won: bool,
    pub camera: Camera,
    /// Host viewport, fixed at open
    pub viewport: Vec2,
    /// Transitions observed this tick; cleared at the top of each tick
    pub events: Vec<SimEvent>,
}

impl SimState {
    /// Build a fresh state for a validated config
    pub fn new(config: &SimConfig) -> Self {
        Self {
            seed: config.seed,
            tick: 0,
            player: Self::spawn_player(),
            level: Level::generate(config.seed),
            score: 0,
            won: false,
            camera: Camera::default(),
            viewport: config.viewport,
            events: Vec::new(),
        }
    }

    fn spawn_player() -> KinematicBody {
        KinematicBody::new(
            Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        )
    }

    /// Discard the level and regenerate it from the same seed, zeroing the
    /// score and reinitializing the player and scroll. Atomic from the
    /// caller's perspective: the aggregate is rebuilt and swapped in one
    /// assignment; no tick observes a half-reset state.
    ///
    /// Events already emitted this tick (e.g. the death that triggered the
    /// reset) survive so the host still sees them; the tick counter keeps
    /// running so hosts can correlate runs.
    pub fn reset(&mut self) {
        let config = SimConfig {
            seed: self.seed,
            viewport: self.viewport,
        };
        let tick = self.tick;
        let events = std::mem::take(&mut self.events);

        *self = Self::new(&config);
        self.tick = tick;
        self.events = events;
    }

    /// Immutable copy of everything the renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            player: self.player,
            platforms: self.level.platforms.iter().map(|p| p.rect).collect(),
            coins: self.level.coins.clone(),
            enemies: self.level.enemies.clone(),
            goal: self.level.goal.rect,
            score: self.score,
            won: self.won,
            scroll: self.camera.scroll,
            events: self.events.clone(),
        }
    }
}

/// Read-only per-tick view published to the rendering collaborator.
///
/// The renderer turns this into pixels and performs no physics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub player: KinematicBody,
    pub platforms: Vec<Aabb>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub goal: Aabb,
    pub score: u64,
    pub won: bool,
    pub scroll: f32,
    pub events: Vec<SimEvent>,
}
