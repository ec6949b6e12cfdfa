//! Renderable view of a frame
//!
//! Everything an external renderer needs, with no simulation internals: sprites
//! in draw order plus HUD scalars. Captured after the frame has been simulated.

use glam::Vec2;
use serde::Serialize;

use super::entity::{BulletOwner, Entity, PowerUpKind};
use super::state::{GamePhase, GameState};
use crate::consts::HIT_FLASH_MS;

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Player,
    Enemy { kind: u8 },
    Bullet { owner: BulletOwner },
    PowerUp { kind: PowerUpKind },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Red tint strength in [0, 1]
    pub hit_flash: f32,
    /// Draw the shield ring
    pub shield: bool,
}

impl Sprite {
    fn plain(kind: SpriteKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            pos,
            size,
            hit_flash: 0.0,
            shield: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudMessage {
    pub text: String,
    pub remaining_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub health: i32,
    /// Active power-up label, None when nothing is active
    pub powerup: Option<&'static str>,
    pub level: u32,
    /// Live messages, oldest first
    pub messages: Vec<HudMessage>,
    pub phase: GamePhase,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    /// Back to front: enemies, power-ups, player, bullets
    pub sprites: Vec<Sprite>,
    pub hud: Hud,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let mut sprites =
            Vec::with_capacity(state.enemies.len() + state.powerups.len() + state.bullets.len() + 1);

        sprites.extend(state.enemies.iter().map(|e| {
            Sprite::plain(SpriteKind::Enemy { kind: e.kind }, e.pos, e.size())
        }));
        sprites.extend(state.powerups.iter().map(|p| {
            Sprite::plain(SpriteKind::PowerUp { kind: p.kind }, p.pos, p.size())
        }));

        let player = &state.player;
        sprites.push(Sprite {
            kind: SpriteKind::Player,
            pos: player.pos,
            size: player.size(),
            hit_flash: (player.hit_flash_ms / HIT_FLASH_MS).clamp(0.0, 1.0),
            shield: player.shield_active,
        });

        sprites.extend(state.bullets.iter().map(|b| {
            Sprite::plain(SpriteKind::Bullet { owner: b.owner }, b.pos, b.size())
        }));

        let now = state.now_ms;
        let hud = Hud {
            score: player.score,
            health: player.health,
            powerup: player.powerup_label(),
            level: state.level,
            messages: state
                .messages
                .live(now)
                .map(|m| HudMessage {
                    text: m.text.clone(),
                    remaining_ms: m.expires_at_ms - now,
                })
                .collect(),
            phase: state.phase,
        };

        Self { sprites, hud }
    }
}
