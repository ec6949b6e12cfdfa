//! Nova Strike - A top-down arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, session state)
//! - `settings`: Playfield and driver configuration

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Target frame rate; velocities are expressed in pixels per frame at this rate
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_START_HEALTH: i32 = 5;
    /// Distance from the bottom edge to the player's starting center
    pub const PLAYER_START_OFFSET: f32 = 80.0;
    /// Milliseconds between shots
    pub const DEFAULT_FIRE_DELAY_MS: u64 = 300;
    pub const RAPID_FIRE_DELAY_MS: u64 = 120;
    /// Hit flash duration (visual only)
    pub const HIT_FLASH_MS: f32 = 300.0;
    /// Muzzle offset above the player's center
    pub const MUZZLE_OFFSET: f32 = 16.0;
    /// Horizontal divergence of the outer shots of a triple volley
    pub const TRIPLE_SPREAD: f32 = 0.15;
    /// Chance that a shot under rapid fire becomes a triple volley
    pub const TRIPLE_FIRE_CHANCE: f32 = 0.25;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_WIDTH: f32 = 8.0;
    pub const BULLET_HEIGHT: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_SPEED_MIN: f32 = 1.0;
    pub const ENEMY_SPEED_MAX: f32 = 3.0;
    pub const ENEMY_BASE_SIZE: f32 = 40.0;
    pub const ENEMY_SIZE_PER_KIND: f32 = 10.0;
    /// Horizontal pixels per frame a homing enemy drifts toward the player
    pub const HOMING_NUDGE: f32 = 0.5;
    /// Enemies are culled once their top passes this far below the playfield
    pub const ENEMY_DESPAWN_MARGIN: f32 = 50.0;
    /// Spawn weights for enemy kinds 0, 1 and 2
    pub const ENEMY_KIND_WEIGHTS: [u32; 3] = [60, 30, 10];

    /// Power-up defaults
    pub const POWERUP_SIZE: f32 = 26.0;
    pub const POWERUP_FALL_SPEED: f32 = 1.2;
    pub const POWERUP_DURATION_MS: u64 = 6000;
    pub const POWERUP_INTERVAL_MS: u64 = 12000;
    /// Chance a destroyed enemy drops a power-up
    pub const LOOT_DROP_CHANCE: f32 = 0.12;

    /// Spawning
    pub const SPAWN_INTERVAL_MS: u64 = 900;
    pub const SPAWN_INTERVAL_FLOOR_MS: u64 = 350;
    pub const SPAWN_INTERVAL_STEP_MS: u64 = 40;
    /// Horizontal margin kept free when choosing a spawn column
    pub const SPAWN_MARGIN: i32 = 40;
    pub const ENEMY_SPAWN_Y: f32 = -40.0;
    pub const POWERUP_SPAWN_Y: f32 = -20.0;

    /// Scoring
    pub const POINTS_PER_LEVEL: u64 = 200;
    pub const KILL_BASE_POINTS: u64 = 10;
    pub const KILL_POINTS_PER_KIND: u64 = 5;

    /// HUD message queue
    pub const MAX_MESSAGES: usize = 3;
    pub const MESSAGE_TTL_MS: u64 = 2500;
}

/// Frame time scale: 1.0 when a frame took exactly 1/FPS seconds
#[inline]
pub fn frame_scale(elapsed_ms: u32, fps: u32) -> f32 {
    elapsed_ms as f32 * fps as f32 / 1000.0
}

/// Resolve a pair of opposing held keys into an axis value in {-1, 0, 1}
#[inline]
pub fn axis(negative: bool, positive: bool) -> i8 {
    match (negative, positive) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    }
}

/// Turn an axis intent into a unit-length direction (zero when idle)
#[inline]
pub fn intent_direction(dx: i8, dy: i8) -> Vec2 {
    Vec2::new(dx.signum() as f32, dy.signum() as f32).normalize_or_zero()
}
