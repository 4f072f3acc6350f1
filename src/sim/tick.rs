//! Per-tick simulation step
//!
//! One tick runs, in order: clock advance, energy regen, missile update,
//! obstacle motion + collision + removal, spawn check, ship movement, fire
//! check. Missile positions used in collision are the just-updated ones; a
//! missile consumed by a match is parked off-field and dropped by the NEXT
//! tick's missile pass.

use glam::Vec2;
use rand::Rng;

use super::collision::score_for_size;
use super::state::{GameEvent, GameState, Missile, Obstacle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Sampled keyboard state for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire intent; evaluated fresh each tick, denied attempts are not queued
    pub fire: bool,
}

/// Ship position delta for one tick.
///
/// Each axis contributes `step` independently, so diagonal movement is
/// faster than axis-aligned movement by sqrt(2). Intentional quirk.
pub fn movement_delta(input: &TickInput, step: f32) -> Vec2 {
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= step;
    }
    if input.down {
        delta.y += step;
    }
    if input.left {
        delta.x -= step;
    }
    if input.right {
        delta.x += step;
    }
    delta
}

/// Advance the game state by one tick of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, tuning: &Tuning) {
    state.clock_ms += f64::from(dt) * 1000.0;

    // Regen is the only way energy rises; the fire gate is the only way it
    // falls, so only the upper bound needs clamping
    state.energy = (state.energy + tuning.energy_regen_per_sec * dt).min(tuning.energy_max);

    update_missiles(&mut state.missiles, dt * tuning.missile_speed);
    update_obstacles(state, dt);

    // The spawn trial is a per-eligible-tick Bernoulli draw, so its effective
    // rate depends on poll frequency. Zero-delta ticks skip the draw entirely
    // so that a dt=0 tick is a strict no-op.
    if dt > 0.0 {
        maybe_spawn_obstacle(state, tuning);
    }

    state.ship.pos += movement_delta(input, dt * tuning.move_speed);

    if input.fire
        && state.clock_ms > state.last_fire_ms + tuning.fire_cooldown_ms
        && state.energy >= tuning.energy_cost_per_shot
    {
        state.last_fire_ms = state.clock_ms;
        state
            .missiles
            .push(Missile::new(state.ship.pos + Vec2::new(MUZZLE_OFFSET_X, 0.0)));
        state.energy -= tuning.energy_cost_per_shot;
        state.events.push(GameEvent::MissileFired);
    }
}

/// Advance all missiles and drop the ones past the right edge.
///
/// Order-preserving: sequence order is the collision tie-break. A missile
/// at exactly the field edge survives; removal requires `x > field_width`.
fn update_missiles(missiles: &mut Vec<Missile>, advance: f32) {
    for m in missiles.iter_mut() {
        m.pos.x += advance;
    }
    missiles.retain(|m| m.pos.x <= FIELD_WIDTH);
}

/// Move obstacles, resolve missile hits, drop obstacles past the left edge.
///
/// Each obstacle matches at most one missile per tick: the first missile in
/// sequence order inside its box. A match parks the obstacle at `-size` (the
/// retain below drops it this tick) and the missile off-field to the right
/// (next tick's missile pass drops it).
fn update_obstacles(state: &mut GameState, dt: f32) {
    let GameState {
        obstacles,
        missiles,
        score,
        events,
        ..
    } = state;

    for o in obstacles.iter_mut() {
        o.pos.x -= dt * o.speed;
        o.angle += dt * o.speed;

        let bounds = o.bounds();
        for m in missiles.iter_mut() {
            if bounds.contains(m.pos) {
                let delta = score_for_size(o.size);
                o.pos.x = -o.size;
                m.pos.x = MISSILE_PARKED_X;
                *score += delta;
                events.push(GameEvent::ObstacleDestroyed { score_delta: delta });
                break;
            }
        }
    }

    obstacles.retain(|o| o.pos.x > -o.size);
}

/// Spawn trial: eligible once `spawn_interval_ms` has passed since the last
/// spawn, then a 1-in-`spawn_odds` draw decides. Draw order (size, y, speed)
/// is part of the deterministic replay contract.
fn maybe_spawn_obstacle(state: &mut GameState, tuning: &Tuning) {
    if state.clock_ms > state.last_spawn_ms + tuning.spawn_interval_ms
        && state.rng.random_range(0..tuning.spawn_odds) == 0
    {
        state.last_spawn_ms = state.clock_ms;
        let size = state
            .rng
            .random_range(tuning.obstacle_size_min..tuning.obstacle_size_max);
        let y = state.rng.random_range(0.0..FIELD_HEIGHT);
        let speed = state
            .rng
            .random_range(tuning.obstacle_speed_min..tuning.obstacle_speed_max);
        state.obstacles.push(Obstacle {
            pos: Vec2::new(FIELD_WIDTH + size, y),
            speed,
            size,
            angle: 0.0,
        });
    }
}
