//! Session settings
//!
//! Stored as JSON next to the binary. Missing or unreadable files fall back to
//! defaults; individual missing fields take their default value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Default settings file name
pub const SETTINGS_FILE: &str = "nova-strike.json";

/// Smallest playfield that still fits the ship and a spawn column
const MIN_WIDTH: f32 = PLAYER_WIDTH + 2.0 * SPAWN_MARGIN as f32;
const MIN_HEIGHT: f32 = PLAYER_HEIGHT + PLAYER_START_OFFSET * 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,

    // === Timing ===
    /// Frame rate the velocities are tuned for
    pub target_fps: u32,
    /// HUD message lifetime
    pub message_ttl_ms: u64,

    // === Driver ===
    /// Fixed RNG seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    /// Frames to simulate in a headless run
    pub demo_frames: u64,
    /// Let the autopilot play
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            target_fps: FPS,
            message_ttl_ms: MESSAGE_TTL_MS,

            seed: None,
            demo_frames: 60 * FPS as u64,
            autopilot: true,
        }
    }
}

impl Settings {
    /// Clamp values that would break the simulation
    pub fn sanitized(mut self) -> Self {
        if !self.width.is_finite() || self.width < MIN_WIDTH {
            log::warn!("Playfield width {} too small, using {}", self.width, MIN_WIDTH);
            self.width = MIN_WIDTH;
        }
        if !self.height.is_finite() || self.height < MIN_HEIGHT {
            log::warn!("Playfield height {} too small, using {}", self.height, MIN_HEIGHT);
            self.height = MIN_HEIGHT;
        }
        self.target_fps = self.target_fps.clamp(1, 1000);
        self
    }

    /// Parse settings from JSON, None if malformed
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::info!("No settings at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Save settings to `path`. Failures are logged, not fatal.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}
