//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per invocation
//! - Fixed per-tick ordering (integrate, x-resolve, y-resolve, jump, camera,
//!   enemies, interactions) - reordering changes corner-collision outcomes
//! - Stable iteration order over level entities
//! - No rendering, I/O, or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod rect;
pub mod session;
pub mod state;
pub mod tick;

pub use body::KinematicBody;
pub use camera::Camera;
pub use level::{Coin, Enemy, Goal, Level, Platform};
pub use rect::Aabb;
pub use session::{Simulation, TickOutcome};
pub use state::{ConfigError, SimConfig, SimEvent, SimState, Snapshot};
pub use tick::{TickInput, tick};
