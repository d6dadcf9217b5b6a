//! Castle Run - deterministic platformer simulation core
//!
//! The embedded "tech demo" platformer of a desktop-shell toy, extracted into
//! a standalone fixed-timestep simulation. The shell and renderer are hosts:
//! they forward a boolean input snapshot once per tick and read back an
//! immutable entity snapshot after each completed tick.
//!
//! Core module:
//! - `sim`: Deterministic simulation (physics, collision, level, game state)

pub mod sim;

pub use sim::{ConfigError, SimConfig, Simulation, Snapshot, TickInput, TickOutcome};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the shell's ~16ms frame cadence)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Viewport dimensions the reference shell renders at
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Level dimensions of the reference layout
    pub const LEVEL_WIDTH: f32 = 1600.0;
    pub const LEVEL_HEIGHT: f32 = 480.0;
    /// Top edge of the contiguous ground strip
    pub const GROUND_Y: f32 = 360.0;

    /// Player body
    pub const PLAYER_SPAWN_X: f32 = 80.0;
    pub const PLAYER_SPAWN_Y: f32 = 320.0;
    pub const PLAYER_WIDTH: f32 = 24.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;

    /// Horizontal input acceleration per tick
    pub const WALK_ACCEL: f32 = 0.8;
    /// Horizontal friction factor applied each tick
    pub const FRICTION: f32 = 0.9;
    /// Horizontal speed clamp
    pub const MAX_RUN_SPEED: f32 = 4.0;
    /// Gravity per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical speed clamp (both directions)
    pub const MAX_FALL_SPEED: f32 = 12.0;
    /// Jump impulse (negative is up; level space has y growing downward)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Enemy body
    pub const ENEMY_WIDTH: f32 = 28.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    /// Initial patrol velocity (leftward)
    pub const ENEMY_PATROL_SPEED: f32 = -1.0;

    /// Coin pickup radius
    pub const COIN_RADIUS: f32 = 8.0;
    /// Score awarded per coin
    pub const COIN_SCORE: u64 = 100;
    /// Score awarded per stomped enemy
    pub const STOMP_SCORE: u64 = 200;
    /// Upward bounce applied to the player after a stomp
    pub const STOMP_BOUNCE: f32 = -8.0;
    /// Bottom-edge tolerance for the stomp-vs-death decision
    pub const STOMP_TOLERANCE: f32 = 6.0;

    /// Camera dead-zone: advance when the player passes this viewport fraction
    pub const CAMERA_LEAD: f32 = 0.6;
    /// Camera dead-zone: retreat when the player drops below this fraction
    pub const CAMERA_TRAIL: f32 = 0.3;
}
