//! Interval-driven spawning of enemies and power-ups
//!
//! Two independent timers compared against the frame's `now`. The enemy timer
//! uses the level-scaled interval; the power-up timer runs on a fixed period.

use glam::Vec2;

use super::entity::{Enemy, PowerUp, PowerUpKind};
use super::random::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Fall speed range for enemies spawned at `level`
pub fn enemy_speed_range(level: u32) -> (f32, f32) {
    let level = level as f32;
    (
        ENEMY_SPEED_MIN + level * 0.1,
        ENEMY_SPEED_MAX + level * 0.2,
    )
}

/// Random spawn column, keeping clear of the side walls
fn spawn_x<R: RandomSource>(state: &GameState, rng: &mut R) -> f32 {
    let lo = state.bounds.left() as i32 + SPAWN_MARGIN;
    let hi = (state.bounds.right() as i32 - SPAWN_MARGIN).max(lo);
    rng.range_inclusive(lo, hi) as f32
}

/// Create one enemy above the playfield
pub fn spawn_enemy<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    let x = spawn_x(state, rng);
    let kind = rng.weighted(&ENEMY_KIND_WEIGHTS) as u8;
    let (lo, hi) = enemy_speed_range(state.level);
    let speed = rng.range(lo, hi);
    let enemy = Enemy::spawn(Vec2::new(x, ENEMY_SPAWN_Y), kind, speed, rng);
    log::debug!("Spawned kind {} enemy at x={} speed={:.2}", kind, x, speed);
    state.enemies.push(enemy);
}

/// Create one power-up above the playfield and announce it
pub fn spawn_powerup<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    let x = spawn_x(state, rng);
    let kind = PowerUpKind::random(rng);
    log::debug!("Spawned {} power-up at x={}", kind.label(), x);
    state
        .powerups
        .push(PowerUp::new(Vec2::new(x, POWERUP_SPAWN_Y), kind));
    state.events.push(GameEvent::PowerUpSpawned { kind });
    state.push_message("Powerup incoming");
}

/// Fire whichever spawn timers are due at `state.now_ms`
pub fn run_spawner<R: RandomSource>(state: &mut GameState, rng: &mut R) {
    let now = state.now_ms;

    if now.saturating_sub(state.last_enemy_spawn_ms) >= state.spawn_interval_ms {
        spawn_enemy(state, rng);
        state.last_enemy_spawn_ms = now;
    }

    if now.saturating_sub(state.last_powerup_spawn_ms) >= POWERUP_INTERVAL_MS {
        spawn_powerup(state, rng);
        state.last_powerup_spawn_ms = now;
    }
}
