//! The player's ship
//!
//! Movement, fire cadence, the power-up state machine and shield/damage rules.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bullet, BulletOwner, PowerUpKind};
use super::rect::Rect;
use crate::consts::*;
use crate::intent_direction;

/// Horizontal direction components of each bullet in a volley
const SINGLE_SHOT: [f32; 1] = [0.0];
const TRIPLE_VOLLEY: [f32; 3] = [-TRIPLE_SPREAD, 0.0, TRIPLE_SPREAD];

/// A power-up currently affecting the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePowerUp {
    pub kind: PowerUpKind,
    /// Session time at which the effect ends
    pub expires_at_ms: u64,
}

/// Result of [`Player::take_hit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// The shield soaked the hit, health unchanged
    Absorbed,
    /// Health was reduced by one
    Applied,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub health: i32,
    pub score: u64,
    pub fire_delay_ms: u64,
    /// None until the first shot
    pub last_fire_ms: Option<u64>,
    pub powerup: Option<ActivePowerUp>,
    pub shield_active: bool,
    /// Remaining hit flash in milliseconds (visual only)
    pub hit_flash_ms: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            health: PLAYER_START_HEALTH,
            score: 0,
            fire_delay_ms: DEFAULT_FIRE_DELAY_MS,
            last_fire_ms: None,
            powerup: None,
            shield_active: false,
            hit_flash_ms: 0.0,
        }
    }

    /// Player placed at the bottom-center of a playfield
    pub fn at_start(bounds: &Rect) -> Self {
        let center = bounds.center();
        Self::new(Vec2::new(center.x, bounds.bottom() - PLAYER_START_OFFSET))
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size())
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Move by a directional intent, then clamp into `field`.
    ///
    /// Each axis is clamped independently so pushing into a wall diagonally still
    /// slides along it.
    pub fn move_by(&mut self, dx: i8, dy: i8, scale: f32, field: &Rect) {
        let step = intent_direction(dx, dy) * PLAYER_SPEED * scale;
        let moved = Rect::from_center(self.pos + step, self.size());
        self.pos = moved.clamped_within(field).center();
    }

    pub fn can_fire(&self, now_ms: u64) -> bool {
        match self.last_fire_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.fire_delay_ms,
        }
    }

    /// Fire if the cadence allows. Returns the number of bullets pushed into `sink`.
    pub fn fire(&mut self, now_ms: u64, sink: &mut Vec<Bullet>, triple: bool) -> usize {
        if !self.can_fire(now_ms) {
            return 0;
        }
        self.last_fire_ms = Some(now_ms);

        let muzzle = self.pos - Vec2::new(0.0, MUZZLE_OFFSET);
        let spreads: &[f32] = if triple { &TRIPLE_VOLLEY } else { &SINGLE_SHOT };
        for &dx in spreads {
            sink.push(Bullet::new(muzzle, Vec2::new(dx, -1.0), BulletOwner::Player));
        }
        spreads.len()
    }

    /// Activate a power-up, replacing whatever was active
    pub fn apply_powerup(&mut self, kind: PowerUpKind, now_ms: u64) {
        self.powerup = Some(ActivePowerUp {
            kind,
            expires_at_ms: now_ms + POWERUP_DURATION_MS,
        });
        self.fire_delay_ms = DEFAULT_FIRE_DELAY_MS;
        self.shield_active = false;
        match kind {
            PowerUpKind::Rapid => self.fire_delay_ms = RAPID_FIRE_DELAY_MS,
            PowerUpKind::Shield => self.shield_active = true,
        }
    }

    /// Expire the active power-up once its time is up. Returns the expired kind.
    pub fn update_powerup(&mut self, now_ms: u64) -> Option<PowerUpKind> {
        let active = self.powerup?;
        if now_ms < active.expires_at_ms {
            return None;
        }
        self.clear_powerup();
        Some(active.kind)
    }

    fn clear_powerup(&mut self) {
        self.powerup = None;
        self.fire_delay_ms = DEFAULT_FIRE_DELAY_MS;
        self.shield_active = false;
    }

    pub fn take_hit(&mut self) -> HitOutcome {
        if self.shield_active {
            self.clear_powerup();
            HitOutcome::Absorbed
        } else {
            self.health -= 1;
            self.hit_flash_ms = HIT_FLASH_MS;
            HitOutcome::Applied
        }
    }

    /// Decay the hit flash by the real time that passed this frame
    pub fn decay_hit_flash(&mut self, elapsed_ms: f32) {
        self.hit_flash_ms = (self.hit_flash_ms - elapsed_ms).max(0.0);
    }

    pub fn is_flashing(&self) -> bool {
        self.hit_flash_ms > 0.0
    }

    pub fn has_rapid(&self) -> bool {
        matches!(self.powerup, Some(ActivePowerUp { kind: PowerUpKind::Rapid, .. }))
    }

    /// Label of the active power-up for the HUD
    pub fn powerup_label(&self) -> Option<&'static str> {
        self.powerup.map(|p| p.kind.label())
    }
}
