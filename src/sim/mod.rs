//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One clock read per frame, advanced only while running
//! - Injected RNG only
//! - Stable iteration order (insertion order within each group)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod player;
pub mod random;
pub mod rect;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{CollisionReport, resolve_collisions};
pub use entity::{Bullet, BulletOwner, Enemy, Entity, PowerUp, PowerUpKind, UpdateContext, update_group};
pub use player::{ActivePowerUp, HitOutcome, Player};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use rect::Rect;
pub use session::Session;
pub use snapshot::{Hud, HudMessage, RenderSnapshot, Sprite, SpriteKind};
pub use spawn::{enemy_speed_range, run_spawner, spawn_enemy, spawn_powerup};
pub use state::{
    GameEvent, GamePhase, GameState, Message, MessageQueue, level_for_score,
    spawn_interval_for_level,
};
pub use tick::{TickInput, tick};
