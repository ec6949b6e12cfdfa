//! Bullets, enemies and power-ups
//!
//! Each kind owns its own fields but shares the [`Entity`] contract so groups can
//! be advanced and culled uniformly by [`update_group`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::rect::Rect;
use crate::consts::*;

/// Per-frame inputs every entity update may read
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    /// Frame time scale (1.0 at the target frame rate)
    pub scale: f32,
    /// Session clock in milliseconds
    pub now_ms: u64,
    /// Playfield bounds
    pub bounds: Rect,
    /// Player center, the only cross-entity read (enemy homing)
    pub player_center: Vec2,
}

/// Shared contract for everything that lives in an entity group
pub trait Entity {
    /// Center position
    fn pos(&self) -> Vec2;

    /// Bounding box extent
    fn size(&self) -> Vec2;

    fn is_alive(&self) -> bool;

    /// Mark the entity for removal
    fn kill(&mut self);

    /// Advance one frame; may kill the entity when it leaves the playfield
    fn update(&mut self, ctx: &UpdateContext);

    fn bounds(&self) -> Rect {
        Rect::from_center(self.pos(), self.size())
    }
}

/// Update every entity in a group, then drop the dead ones
pub fn update_group<E: Entity>(group: &mut Vec<E>, ctx: &UpdateContext) {
    for entity in group.iter_mut() {
        entity.update(ctx);
    }
    group.retain(|e| e.is_alive());
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    /// Not emitted by current enemies
    Enemy,
}

/// A straight-flying projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub owner: BulletOwner,
    pub alive: bool,
}

impl Bullet {
    /// Bullet centered at `pos` travelling along `dir` (components scaled by speed)
    pub fn new(pos: Vec2, dir: Vec2, owner: BulletOwner) -> Self {
        Self {
            pos,
            vel: dir * BULLET_SPEED,
            owner,
            alive: true,
        }
    }

    pub fn is_player_owned(&self) -> bool {
        self.owner == BulletOwner::Player
    }
}

impl Entity for Bullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.pos += self.vel * ctx.scale;
        if self.bounds().is_fully_outside(&ctx.bounds) {
            self.kill();
        }
    }
}

/// A descending hostile ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// 0, 1 or 2; larger kinds are bigger, tougher and kind 2 homes in
    pub kind: u8,
    pub health: i32,
    /// Fall speed in pixels per frame
    pub speed: f32,
    /// Sway amplitude, cosmetic
    pub sway: f32,
    /// Sway angular rate
    pub angular: f32,
    pub alive: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, kind: u8, speed: f32, sway: f32, angular: f32) -> Self {
        let kind = kind.min(2);
        Self {
            pos,
            kind,
            health: kind as i32 + 1,
            speed,
            sway,
            angular,
            alive: true,
        }
    }

    /// New enemy with randomly chosen sway parameters
    pub fn spawn<R: RandomSource>(pos: Vec2, kind: u8, speed: f32, rng: &mut R) -> Self {
        let sway = rng.range(-0.5, 0.5);
        let angular = rng.range(0.5, 1.5);
        Self::new(pos, kind, speed, sway, angular)
    }

    pub fn homes(&self) -> bool {
        self.kind >= 2
    }

    /// Points awarded for destroying this enemy
    pub fn points(&self) -> u64 {
        KILL_BASE_POINTS + self.kind as u64 * KILL_POINTS_PER_KIND
    }

    /// Apply damage. Returns true only on the hit that destroys the enemy.
    pub fn damage(&mut self, amount: i32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.kill();
            return true;
        }
        false
    }
}

impl Entity for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(ENEMY_BASE_SIZE + self.kind as f32 * ENEMY_SIZE_PER_KIND)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.pos.y += self.speed * ctx.scale;

        let t = ctx.now_ms as f32 * 0.001;
        self.pos.x += (t * self.angular).sin() * self.sway * ctx.scale * 2.0;

        if self.homes() {
            if ctx.player_center.x < self.pos.x {
                self.pos.x -= HOMING_NUDGE * ctx.scale;
            } else {
                self.pos.x += HOMING_NUDGE * ctx.scale;
            }
        }

        if self.bounds().top() > ctx.bounds.bottom() + ENEMY_DESPAWN_MARGIN {
            self.kill();
        }
    }
}

/// Power-up effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Shorter fire delay, chance of triple shots
    Rapid,
    /// Absorbs one hit
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::Rapid, PowerUpKind::Shield];

    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Rapid => "rapid",
            PowerUpKind::Shield => "shield",
        }
    }

    /// Uniform choice between all kinds
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        let i = rng.range_inclusive(0, Self::ALL.len() as i32 - 1) as usize;
        Self::ALL[i]
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            alive: true,
        }
    }
}

impl Entity for PowerUp {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(POWERUP_SIZE)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn kill(&mut self) {
        self.alive = false;
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.pos.y += POWERUP_FALL_SPEED * ctx.scale;
        // Capsules enter from above, so only the bottom edge culls them
        if self.bounds().top() > ctx.bounds.bottom() {
            self.kill();
        }
    }
}
