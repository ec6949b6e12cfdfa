//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`]. Field ownership:
//! the spawner writes the spawn timestamps, the player owns its own timers,
//! collision resolution touches score, health and entity liveness.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bullet, Enemy, PowerUp, PowerUpKind};
use super::player::{HitOutcome, Player};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Simulation frozen until the pause toggle is pressed again
    Paused,
    /// Run ended; waiting for restart or quit
    GameOver,
    /// Quit from the game over screen; no further frames are processed
    Terminated,
}

/// Something notable that happened during a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyDestroyed { kind: u8, points: u64, pos: Vec2 },
    LootDropped { kind: PowerUpKind, pos: Vec2 },
    PlayerHit { outcome: HitOutcome, health: i32 },
    PowerUpSpawned { kind: PowerUpKind },
    PowerUpCollected { kind: PowerUpKind },
    PowerUpExpired { kind: PowerUpKind },
    LevelUp { level: u32 },
    GameOver { score: u64, level: u32 },
}

/// A transient HUD notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub expires_at_ms: u64,
}

/// Bounded FIFO of notifications; pushing past capacity evicts the oldest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageQueue {
    messages: VecDeque<Message>,
    capacity: usize,
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::with_capacity(MAX_MESSAGES)
    }
}

impl MessageQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, now_ms: u64, ttl_ms: u64) {
        if self.capacity == 0 {
            return;
        }
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(Message {
            text: text.into(),
            expires_at_ms: now_ms + ttl_ms,
        });
    }

    /// Drop messages whose expiry has passed
    pub fn prune(&mut self, now_ms: u64) {
        self.messages.retain(|m| now_ms <= m.expires_at_ms);
    }

    /// Messages still visible at `now_ms`, oldest first
    pub fn live(&self, now_ms: u64) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(move |m| now_ms <= m.expires_at_ms)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Level for a given score
pub fn level_for_score(score: u64) -> u32 {
    (1 + score / POINTS_PER_LEVEL).min(u32::MAX as u64) as u32
}

/// Enemy spawn interval for a level, floored at 350 ms
pub fn spawn_interval_for_level(level: u32) -> u64 {
    let reduction = level as u64 * SPAWN_INTERVAL_STEP_MS;
    SPAWN_INTERVAL_MS
        .saturating_sub(reduction)
        .max(SPAWN_INTERVAL_FLOOR_MS)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield bounds
    pub bounds: Rect,
    /// Target frame rate used to derive the frame time scale
    pub fps: u32,
    /// TTL for HUD messages
    pub message_ttl_ms: u64,
    /// Session clock; only advances while running
    pub now_ms: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub level: u32,
    pub spawn_interval_ms: u64,
    pub last_enemy_spawn_ms: u64,
    pub last_powerup_spawn_ms: u64,
    pub messages: MessageQueue,
    /// Events from the most recent simulated frame
    pub events: Vec<GameEvent>,
    /// Frames simulated while running
    pub frame: u64,
}

impl GameState {
    /// Fresh run on the default 800x600 playfield
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    /// Fresh run on the configured playfield. Settings are sanitized first so
    /// the ship always fits inside the bounds.
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        let bounds = Rect::playfield(settings.width, settings.height);
        let level = level_for_score(0);
        Self {
            bounds,
            fps: settings.target_fps.max(1),
            message_ttl_ms: settings.message_ttl_ms,
            now_ms: 0,
            phase: GamePhase::Running,
            player: Player::at_start(&bounds),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            level,
            spawn_interval_ms: spawn_interval_for_level(level),
            last_enemy_spawn_ms: 0,
            last_powerup_spawn_ms: 0,
            messages: MessageQueue::default(),
            events: Vec::new(),
            frame: 0,
        }
    }

    /// Reset to a fresh run, keeping playfield configuration
    pub fn reset(&mut self) {
        let bounds = self.bounds;
        let fps = self.fps;
        let message_ttl_ms = self.message_ttl_ms;
        *self = Self {
            bounds,
            fps,
            message_ttl_ms,
            player: Player::at_start(&bounds),
            ..Self::new()
        };
    }

    /// Queue a HUD notification with the configured TTL
    pub fn push_message(&mut self, text: impl Into<String>) {
        self.messages.push(text, self.now_ms, self.message_ttl_ms);
    }

    /// Recompute level and spawn interval from the current score
    pub fn recompute_difficulty(&mut self) {
        let level = level_for_score(self.player.score);
        if level > self.level {
            log::info!("Level {} reached (score {})", level, self.player.score);
            self.events.push(GameEvent::LevelUp { level });
        }
        self.level = level;
        self.spawn_interval_ms = spawn_interval_for_level(level);
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
