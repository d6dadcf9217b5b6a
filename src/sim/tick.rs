//! Fixed timestep simulation tick
//!
//! One call advances the whole simulation by one step. The per-tick order is
//! a determinism contract: read input, integrate horizontal then vertical
//! velocity, resolve the x pass then the y pass, apply the jump, update the
//! camera, step the enemies, then evaluate interactions. Given a fixed seed
//! and input sequence the run is bit-identical.

use glam::Vec2;

use crate::consts::*;

use super::collision;
use super::enemy;
use super::state::{SimEvent, SimState};

/// Input snapshot for a single tick, sampled once at the start.
///
/// The simulation is agnostic to the physical device: the host maps whatever
/// keys it likes onto these semantic flags. `quit` is consumed by the session
/// wrapper before the tick body runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub reset: bool,
    pub quit: bool,
}

/// Advance the simulation by one fixed step.
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.events.clear();
    state.tick += 1;

    if input.reset {
        log::debug!("reset requested at tick {}", state.tick);
        state.reset();
        return;
    }

    // Integrate player velocity
    collision::integrate_horizontal(&mut state.player, input.left, input.right);
    collision::integrate_vertical(&mut state.player);

    // Axis-separated resolution, x then y. The x pass may itself resolve
    // along y in a corner, so the y delta is re-read after it.
    state.player.grounded = false;
    let dx = state.player.vel.x;
    collision::move_and_resolve(&mut state.player, Vec2::new(dx, 0.0), &state.level.platforms);
    let dy = state.player.vel.y;
    collision::move_and_resolve(&mut state.player, Vec2::new(0.0, dy), &state.level.platforms);

    // Jump only from the ground
    if input.jump && state.player.grounded {
        state.player.vel.y = JUMP_VELOCITY;
        state.player.grounded = false;
    }

    // Camera follows the resolved position
    state
        .camera
        .update(state.player.pos.x, state.viewport.x, state.level.bounds.x);

    // Enemy patrol
    let platforms = &state.level.platforms;
    for foe in &mut state.level.enemies {
        enemy::step(foe, platforms);
    }

    interactions(state);
}

/// Interaction evaluator: coin pickups, stomp-vs-death, goal trigger.
/// Runs once per tick after the enemy steps.
fn interactions(state: &mut SimState) {
    let player_rect = state.player.aabb();

    // Coins: circle-vs-rect, one-way alive flip
    for (i, coin) in state.level.coins.iter_mut().enumerate() {
        if coin.alive && player_rect.overlaps_circle(coin.pos, coin.radius) {
            coin.alive = false;
            state.score += COIN_SCORE;
            state.events.push(SimEvent::CoinCollected { index: i });
        }
    }

    // Enemies: a downward approach onto the top edge is a stomp, anything
    // else kills the player. A death aborts the rest of the pass.
    for i in 0..state.level.enemies.len() {
        let foe = state.level.enemies[i];
        if !foe.alive || !player_rect.overlaps(&foe.body.aabb()) {
            continue;
        }

        let falling = state.player.vel.y > 0.0;
        let from_above = state.player.bottom() - STOMP_TOLERANCE <= foe.body.pos.y;
        if falling && from_above {
            state.level.enemies[i].alive = false;
            state.score += STOMP_SCORE;
            state.player.vel.y = STOMP_BOUNCE;
            state.events.push(SimEvent::EnemyStomped { index: i });
            log::debug!("stomp at tick {}, score {}", state.tick, state.score);
        } else {
            state.events.push(SimEvent::PlayerDied);
            log::info!("player died at tick {}; resetting level", state.tick);
            state.reset();
            return;
        }
    }

    // Goal: sticky won flag, stepping continues
    if !state.won && player_rect.overlaps(&state.level.goal.rect) {
        state.won = true;
        state.events.push(SimEvent::GoalReached);
        log::info!("goal reached at tick {} with score {}", state.tick, state.score);
    }
}
